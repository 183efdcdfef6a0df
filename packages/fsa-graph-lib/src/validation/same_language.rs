use std::iter::repeat_n;

use itertools::Itertools;

use crate::automaton::{Language, edge::Label};

/// The non-epsilon symbols of both automata, sorted and without duplicates.
///
/// Subset construction may leave out symbols that only ever lead into the
/// dead state, so words are built over the union of both alphabets.
fn shared_symbols(a: &impl Language, b: &impl Language) -> Vec<Label> {
    a.symbols()
        .into_iter()
        .chain(b.symbols())
        .sorted()
        .dedup()
        .collect_vec()
}

/// Calls `f` for every word over `symbols` shorter than `max_word_length`,
/// stopping at the first word for which it returns false.
fn all_words(
    symbols: &[Label],
    max_word_length: usize,
    mut f: impl FnMut(&[Label]) -> bool,
) -> bool {
    for i in 0..max_word_length {
        let combinations = repeat_n(symbols, i).multi_cartesian_product();

        for word in combinations {
            let word = word.into_iter().cloned().collect_vec();
            if !f(&word) {
                return false;
            }
        }
    }

    true
}

/// Checks if two automata accept the same words up to a certain length.
pub fn same_language(a: &impl Language, b: &impl Language, max_word_length: usize) -> bool {
    let symbols = shared_symbols(a, b);

    all_words(&symbols, max_word_length, |word| {
        a.accepts(word) == b.accepts(word)
    })
}

pub fn assert_same_language(a: &impl Language, b: &impl Language, max_word_length: usize) {
    let symbols = shared_symbols(a, b);

    all_words(&symbols, max_word_length, |word| {
        match (a.accepts(word), b.accepts(word)) {
            (true, false) => {
                panic!(
                    "{:?} is accepted by automaton `a` but not by automaton `b`. Thus their languages are not equal.",
                    word
                );
            }
            (false, true) => {
                panic!(
                    "{:?} is accepted by automaton `b` but not by automaton `a`. Thus their languages are not equal.",
                    word
                );
            }
            _ => true,
        }
    });
}

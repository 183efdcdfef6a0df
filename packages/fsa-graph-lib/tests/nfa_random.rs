use fsa_graph_lib::{
    automaton::{AutomatonContext, Graph, Label, Status},
    validation::same_language::assert_same_language,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_nfa(
    ctx: &mut AutomatonContext,
    r: &mut StdRng,
    state_count: usize,
    edge_count: usize,
    symbols: &[&str],
) -> Graph {
    let mut g = Graph::new("random");

    let vertices = (0..state_count)
        .map(|i| {
            let status = if i == 0 {
                Status::Start
            } else if r.gen_bool(0.3) {
                Status::Finish
            } else {
                Status::Continue
            };
            ctx.vertex(format!("q{}", i), status)
        })
        .collect::<Vec<_>>();

    for v in &vertices {
        g.add_vertex(v);
    }

    for _ in 0..edge_count {
        let from = &vertices[r.gen_range(0..state_count)];
        let to = &vertices[r.gen_range(0..state_count)];
        // an empty symbol makes an epsilon edge
        let symbol = symbols[r.gen_range(0..symbols.len())];

        g.add_edge(&ctx.edge(from, to, symbol)).unwrap();
    }

    g
}

#[test]
fn test_random_nfa_determinization() {
    let mut r = StdRng::seed_from_u64(1);
    let mut ctx = AutomatonContext::new();

    for _ in 0..40 {
        let nfa = random_nfa(&mut ctx, &mut r, 5, 12, &["a", "b", ""]);
        let (dfa, unchanged) = nfa.to_dfa(&mut ctx).unwrap();

        assert_eq!(unchanged, !nfa.is_nfa());
        assert!(!dfa.is_nfa());
        assert_eq!(
            dfa.vertices().filter(|v| v.status() == Status::Start).count(),
            1
        );
        assert_same_language(&nfa, &dfa, 6);

        let (again, unchanged) = dfa.to_dfa(&mut ctx).unwrap();
        assert!(unchanged);
        assert_eq!(again, dfa);
    }
}

#[test]
fn test_random_dfa_matches_like_nfa() {
    use fsa_graph_lib::automaton::Language;

    let mut r = StdRng::seed_from_u64(7);
    let mut ctx = AutomatonContext::new();

    for _ in 0..20 {
        let nfa = random_nfa(&mut ctx, &mut r, 4, 10, &["x", "y", ""]);
        let (dfa, _) = nfa.to_dfa(&mut ctx).unwrap();

        for _ in 0..20 {
            let len = r.gen_range(0..6);
            let input = (0..len)
                .map(|_| if r.gen_bool(0.5) { "x" } else { "y" })
                .collect::<String>();
            let word = input.chars().map(Label::from).collect::<Vec<_>>();

            assert_eq!(dfa.matches(&input), nfa.accepts(&word), "input {:?}", input);
        }
    }
}

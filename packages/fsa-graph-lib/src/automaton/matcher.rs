use itertools::Itertools;

use crate::automaton::{
    Language,
    closure::VertexSet,
    edge::{EdgeId, Label},
    graph::Graph,
    vertex::VertexId,
};

/// The walk a deterministic graph took over an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTrace {
    /// The edges taken, in order.
    pub edges: Vec<EdgeId>,
    /// How many bytes of the input were consumed.
    pub consumed: usize,
    /// The vertex the walk stopped in. `None` if the graph has no start.
    pub end: Option<VertexId>,
    pub accepted: bool,
}

impl Graph {
    /// Checks whether the deterministic graph accepts `input`.
    ///
    /// Panics if the graph turns out not to be deterministic while walking it.
    pub fn matches(&self, input: &str) -> bool {
        self.match_trace(input).accepted
    }

    /// Walks the graph over `input`, taking at each step the one non-epsilon
    /// edge whose input is a prefix of the rest. The walk stops early if there
    /// is no such edge, and never backtracks.
    ///
    /// Panics if more than one edge fits at some step, since then the graph is
    /// not deterministic.
    pub fn match_trace(&self, input: &str) -> MatchTrace {
        let Some(mut current) = self.start_id() else {
            tracing::warn!("Graph `{}` has no start vertex, rejecting", self.name());
            return MatchTrace {
                edges: vec![],
                consumed: 0,
                end: None,
                accepted: false,
            };
        };

        let mut cursor = 0;
        let mut edges = vec![];

        while cursor < input.len() {
            let rest = &input[cursor..];
            let candidates = self
                .outgoing_edges(current)
                .filter(|edge| !edge.is_epsilon() && rest.starts_with(edge.input().as_str()))
                .collect_vec();

            let edge = match candidates.as_slice() {
                [] => break,
                [edge] => *edge,
                _ => panic!(
                    "graph `{}` is not deterministic: {} edges leaving vertex {} match `{}`",
                    self.name(),
                    candidates.len(),
                    current,
                    rest
                ),
            };

            tracing::trace!("{} matched at {}", edge, cursor);

            current = edge.end();
            cursor += edge.input().len();
            edges.push(edge.id());
        }

        MatchTrace {
            accepted: cursor == input.len() && self.is_finish_id(current),
            edges,
            consumed: cursor,
            end: Some(current),
        }
    }
}

impl Language for Graph {
    /// Simulates the graph on sets of vertices, so this works for
    /// nondeterministic graphs too. Symbols outside the alphabet are rejected.
    fn accepts<'a>(&self, word: impl IntoIterator<Item = &'a Label>) -> bool {
        let Some(start) = self.start_id() else {
            return false;
        };

        let mut current = self.epsilon_closure(&VertexSet::from([start]));

        for symbol in word {
            if symbol.is_epsilon() {
                continue;
            }

            current = match self.advance(symbol, &current) {
                Ok(next) => next,
                Err(_) => return false,
            };

            if current.is_empty() {
                return false;
            }
        }

        self.contains_finish(&current)
    }
}

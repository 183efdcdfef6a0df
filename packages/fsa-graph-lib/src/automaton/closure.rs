use std::collections::BTreeSet;

use itertools::Itertools;

use crate::automaton::{
    edge::Label,
    error::{GraphError, GraphResult},
    graph::Graph,
    vertex::VertexId,
};

/// A set of vertices of one graph. Ordered, so that it can be hashed and
/// compared as a whole when used as a DFA state.
pub type VertexSet = BTreeSet<VertexId>;

impl Graph {
    /// Calculates the epsilon closure of a set of vertices: every vertex
    /// reachable from it by zero or more epsilon transitions.
    pub fn epsilon_closure(&self, subset: &VertexSet) -> VertexSet {
        let mut closure = subset.clone();
        let mut stack = subset.iter().copied().collect_vec();

        while let Some(vertex) = stack.pop() {
            for edge in self.outgoing_edges(vertex) {
                if edge.is_epsilon() && closure.insert(edge.end()) {
                    stack.push(edge.end());
                }
            }
        }

        closure
    }

    /// The targets of all edges labeled `symbol` leaving the given vertices.
    /// The result is not epsilon closed.
    ///
    /// Fails if `symbol` is neither epsilon nor part of the alphabet.
    pub fn symbol_move(&self, symbol: &Label, subset: &VertexSet) -> GraphResult<VertexSet> {
        if !symbol.is_epsilon() && !self.is_accept_sym(symbol) {
            return Err(GraphError::UnknownSymbol {
                graph: self.name().to_string(),
                symbol: symbol.clone(),
            });
        }

        let targets = subset
            .iter()
            .flat_map(|&vertex| self.outgoing_edges(vertex))
            .filter(|edge| {
                if symbol.is_epsilon() {
                    edge.is_epsilon()
                } else {
                    edge.input() == symbol
                }
            })
            .map(|edge| edge.end())
            .collect();

        Ok(targets)
    }

    /// Consumes one `symbol` from the given vertices: epsilon closure, then the
    /// move on `symbol`, then epsilon closure again.
    pub fn advance(&self, symbol: &Label, subset: &VertexSet) -> GraphResult<VertexSet> {
        let before = self.epsilon_closure(subset);
        let moved = self.symbol_move(symbol, &before)?;
        Ok(self.epsilon_closure(&moved))
    }

    /// [Graph::advance] applied to the start vertex.
    pub fn closure_from_start(&self, symbol: &Label) -> GraphResult<VertexSet> {
        let start = self.start_id().ok_or_else(|| GraphError::MissingStart {
            graph: self.name().to_string(),
        })?;

        self.advance(symbol, &VertexSet::from([start]))
    }

    /// Checks if a set of vertices contains a finish vertex.
    pub fn contains_finish(&self, subset: &VertexSet) -> bool {
        subset.iter().any(|&vertex| self.is_finish_id(vertex))
    }
}

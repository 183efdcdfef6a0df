use thiserror::Error;

use crate::automaton::{edge::Label, vertex::VertexId};

/// Structural violations. The graph is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} isn't in graph `{graph}`")]
    UnknownVertex { graph: String, vertex: VertexId },

    #[error("`{symbol}` is not in the alphabet of graph `{graph}`")]
    UnknownSymbol { graph: String, symbol: Label },

    #[error("graph `{graph}` has no start vertex")]
    MissingStart { graph: String },
}

pub type GraphResult<T> = Result<T, GraphError>;

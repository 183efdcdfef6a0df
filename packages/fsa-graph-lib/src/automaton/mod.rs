pub mod closure;
pub mod context;
pub mod display;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matcher;
pub mod subset_construction;
pub mod vertex;

pub use context::AutomatonContext;
pub use edge::{Edge, EdgeId, Label};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use vertex::{Status, Vertex, VertexId};

pub trait Alphabet {
    /// The distinct inputs of the automaton in the order they were first
    /// seen. May contain [Label::Epsilon].
    fn alphabet(&self) -> &[Label];

    /// The alphabet without epsilon.
    fn symbols(&self) -> Vec<Label> {
        self.alphabet()
            .iter()
            .filter(|symbol| !symbol.is_epsilon())
            .cloned()
            .collect()
    }
}

/// The basic trait for anything that defines a language over a set alphabet.
pub trait Language: Alphabet {
    fn accepts<'a>(&self, word: impl IntoIterator<Item = &'a Label>) -> bool;
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The role a vertex plays in its automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    Start,
    #[default]
    Continue,
    Finish,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Start => write!(f, "start"),
            Status::Continue => write!(f, "continue"),
            Status::Finish => write!(f, "finish"),
        }
    }
}

/// Identity of a vertex, handed out by an
/// [AutomatonContext](crate::automaton::context::AutomatonContext).
///
/// `session` tags the context that created the vertex, `index` counts within
/// that context.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId {
    pub session: u32,
    pub index: u32,
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}_{}", self.session, self.index)
    }
}

/// A state of an automaton.
///
/// Two vertices are equal only if name, status and id all agree, so two
/// freshly created vertices never compare equal. A clone compares equal to its
/// source and refers to the same state in any graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    status: Status,
    id: VertexId,
}

impl Vertex {
    pub(crate) fn new(name: String, status: Status, id: VertexId) -> Self {
        Vertex { name, status, id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn is_start(&self) -> bool {
        self.status == Status::Start
    }

    pub fn is_continue(&self) -> bool {
        self.status == Status::Continue
    }

    pub fn is_finish(&self) -> bool {
        self.status == Status::Finish
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vertex{{name={}, status={}, id={}}}",
            self.name, self.status, self.id
        )
    }
}

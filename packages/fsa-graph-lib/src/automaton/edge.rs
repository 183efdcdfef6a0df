use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::automaton::vertex::{Vertex, VertexId};

/// The input an edge consumes. An empty input is an epsilon transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Symbol(String),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        match self {
            Label::Symbol(s) => s.is_empty(),
            Label::Epsilon => true,
        }
    }

    /// The text this label consumes. Epsilon consumes nothing.
    pub fn as_str(&self) -> &str {
        match self {
            Label::Symbol(s) => s,
            Label::Epsilon => "",
        }
    }

    /// The number of input bytes consumed when taking an edge with this label.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Maps `Symbol("")` to `Epsilon`, so that both spellings of the empty
    /// input end up as the same alphabet entry.
    pub fn normalize(self) -> Self {
        if self.is_epsilon() {
            Label::Epsilon
        } else {
            self
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::from(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Label::Epsilon
        } else {
            Label::Symbol(value)
        }
    }
}

impl From<char> for Label {
    fn from(value: char) -> Self {
        Label::Symbol(value.to_string())
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Symbol(s) => write!(f, "{}", s),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}

/// Identity of an edge, handed out by an
/// [AutomatonContext](crate::automaton::context::AutomatonContext).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EdgeId {
    pub session: u32,
    pub index: u32,
}

/// A transition from `start` to `end` on `input`, with an optional cost.
///
/// Equality is structural: two edges are equal if they connect the same
/// vertices with the same input and cost, even if they are distinct edges.
/// Membership in a [Graph](crate::automaton::graph::Graph) goes by [EdgeId].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    start: VertexId,
    end: VertexId,
    input: Label,
    cost: f64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, start: &Vertex, end: &Vertex, input: Label, cost: f64) -> Self {
        Edge {
            id,
            start: start.id(),
            end: end.id(),
            input: input.normalize(),
            cost,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn input(&self) -> &Label {
        &self.input
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn is_epsilon(&self) -> bool {
        self.input.is_epsilon()
    }

    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.cost == other.cost
            && self.input == other.input
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge{{input={}", self.input)?;
        if self.cost != 0.0 {
            write!(f, ", cost={}", self.cost)?;
        }
        write!(f, ", {} -> {}}}", self.start, self.end)
    }
}

use std::sync::atomic::{AtomicU32, Ordering};

use crate::automaton::{
    edge::{Edge, EdgeId, Label},
    vertex::{Status, Vertex, VertexId},
};

/// Hands out vertex and edge identities for one automaton-building session.
///
/// Every vertex and edge is created through a context, and every graph derived
/// from them (for example by [Graph::to_dfa](crate::automaton::graph::Graph::to_dfa))
/// should use the same context. Start a new context for an unrelated set of
/// automata. Each context carries its own session tag, so identities from two
/// contexts never collide.
#[derive(Debug)]
pub struct AutomatonContext {
    session: u32,
    next_vertex: u32,
    next_edge: u32,
}

static NEXT_SESSION: AtomicU32 = AtomicU32::new(0);

impl AutomatonContext {
    pub fn new() -> Self {
        AutomatonContext {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn vertex(&mut self, name: impl Into<String>, status: Status) -> Vertex {
        let id = VertexId {
            session: self.session,
            index: self.next_vertex,
        };
        self.next_vertex += 1;
        Vertex::new(name.into(), status, id)
    }

    pub fn start_vertex(&mut self, name: impl Into<String>) -> Vertex {
        self.vertex(name, Status::Start)
    }

    pub fn continue_vertex(&mut self, name: impl Into<String>) -> Vertex {
        self.vertex(name, Status::Continue)
    }

    pub fn finish_vertex(&mut self, name: impl Into<String>) -> Vertex {
        self.vertex(name, Status::Finish)
    }

    /// Creates an edge with cost 0.
    pub fn edge(&mut self, start: &Vertex, end: &Vertex, input: impl Into<Label>) -> Edge {
        self.weighted_edge(start, end, input, 0.0)
    }

    pub fn epsilon_edge(&mut self, start: &Vertex, end: &Vertex) -> Edge {
        self.edge(start, end, Label::Epsilon)
    }

    pub fn weighted_edge(
        &mut self,
        start: &Vertex,
        end: &Vertex,
        input: impl Into<Label>,
        cost: f64,
    ) -> Edge {
        let id = EdgeId {
            session: self.session,
            index: self.next_edge,
        };
        self.next_edge += 1;
        Edge::new(id, start, end, input.into(), cost)
    }

    /// The number of vertices created so far.
    pub fn vertex_count(&self) -> usize {
        self.next_vertex as usize
    }

    /// The number of edges created so far.
    pub fn edge_count(&self) -> usize {
        self.next_edge as usize
    }
}

impl Default for AutomatonContext {
    fn default() -> Self {
        AutomatonContext::new()
    }
}

#[test]
fn test_fresh_vertices_differ() {
    let mut ctx = AutomatonContext::new();
    let v1 = ctx.continue_vertex("v");
    let v2 = ctx.continue_vertex("v");

    assert_ne!(v1, v2);
    assert_eq!(v1, v1.clone());
    assert_eq!(ctx.vertex_count(), 2);
}

#[test]
fn test_contexts_do_not_share_ids() {
    let mut a = AutomatonContext::new();
    let mut b = AutomatonContext::new();
    assert_ne!(a.session(), b.session());

    let va = a.continue_vertex("v");
    let vb = b.continue_vertex("v");
    assert_eq!(va.id().index, vb.id().index);
    assert_ne!(va.id(), vb.id());
    assert_ne!(a.edge(&va, &va, "x").id(), b.edge(&vb, &vb, "x").id());
}

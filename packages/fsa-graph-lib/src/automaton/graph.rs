use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::{
    Direction,
    stable_graph::{EdgeIndex, NodeIndex, StableDiGraph},
};

use crate::{
    automaton::{
        Alphabet,
        context::AutomatonContext,
        edge::{Edge, EdgeId, Label},
        error::{GraphError, GraphResult},
        subset_construction::Determinizer,
        vertex::{Vertex, VertexId},
    },
    config::DeterminizeConfig,
};

/// A finite automaton as a labeled, directed graph.
///
/// Vertices and edges are kept in a stable arena, so removing one never
/// invalidates the others. Membership is decided by [VertexId] and [EdgeId]:
/// adding a clone of a member is a no-op.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    graph: StableDiGraph<Vertex, Edge>,
    vertex_index: HashMap<VertexId, NodeIndex>,
    edge_index: HashMap<EdgeId, EdgeIndex>,
    start: Option<VertexId>,
    finish: HashSet<VertexId>,
    alphabet: Vec<Label>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Graph {
            name: name.into(),
            graph: StableDiGraph::new(),
            vertex_index: HashMap::new(),
            edge_index: HashMap::new(),
            start: None,
            finish: HashSet::new(),
            alphabet: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a vertex. A start vertex becomes the start of the graph, a finish
    /// vertex joins the finish set.
    ///
    /// Panics if the vertex is a start vertex and the graph already has a
    /// different one.
    pub fn add_vertex(&mut self, vertex: &Vertex) {
        if self.exist_vertex(vertex) {
            return;
        }

        if vertex.is_start() {
            assert!(
                self.start.is_none(),
                "graph `{}` already has a start vertex, cannot add {}",
                self.name,
                vertex
            );
            self.start = Some(vertex.id());
        }

        if vertex.is_finish() {
            self.finish.insert(vertex.id());
        }

        let node = self.graph.add_node(vertex.clone());
        self.vertex_index.insert(vertex.id(), node);
    }

    /// Removes a vertex together with every edge starting or ending in it.
    pub fn remove_vertex(&mut self, vertex: &Vertex) {
        let Some(node) = self.vertex_index.remove(&vertex.id()) else {
            return;
        };

        let touching = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .chain(self.graph.edges_directed(node, Direction::Incoming))
            .map(|edge| edge.weight().id())
            .collect_vec();

        for edge in touching {
            self.edge_index.remove(&edge);
        }

        // removing the node drops all of its edges from the arena as well
        self.graph.remove_node(node);

        if self.start == Some(vertex.id()) {
            self.start = None;
        }
        self.finish.remove(&vertex.id());
    }

    /// Adds an edge. Both endpoints must already be part of the graph.
    /// The input of the edge is appended to the alphabet if it is new.
    pub fn add_edge(&mut self, edge: &Edge) -> GraphResult<()> {
        let start = self.node_of(edge.start())?;
        let end = self.node_of(edge.end())?;

        if self.edge_index.contains_key(&edge.id()) {
            return Ok(());
        }

        let index = self.graph.add_edge(start, end, edge.clone());
        self.edge_index.insert(edge.id(), index);

        if !self.is_accept_sym(edge.input()) {
            self.alphabet.push(edge.input().clone());
        }

        Ok(())
    }

    /// Removes an edge. The alphabet keeps its input.
    pub fn remove_edge(&mut self, edge: &Edge) {
        if let Some(index) = self.edge_index.remove(&edge.id()) {
            self.graph.remove_edge(index);
        }
    }

    /// Marks a member vertex as accepting, independent of its status.
    pub fn add_finish(&mut self, vertex: &Vertex) -> GraphResult<()> {
        self.node_of(vertex.id())?;
        self.finish.insert(vertex.id());
        Ok(())
    }

    pub fn exist_vertex(&self, vertex: &Vertex) -> bool {
        self.vertex_index.contains_key(&vertex.id())
    }

    pub fn exist_edge(&self, edge: &Edge) -> bool {
        self.edge_index.contains_key(&edge.id())
    }

    pub fn is_finish(&self, vertex: &Vertex) -> bool {
        self.is_finish_id(vertex.id())
    }

    pub fn is_finish_id(&self, vertex: VertexId) -> bool {
        self.finish.contains(&vertex)
    }

    /// Whether `symbol` appears on some edge of the graph.
    pub fn is_accept_sym(&self, symbol: &Label) -> bool {
        if symbol.is_epsilon() {
            self.alphabet.iter().any(Label::is_epsilon)
        } else {
            self.alphabet.contains(symbol)
        }
    }

    /// Whether the graph is nondeterministic: it has an epsilon transition, or
    /// some vertex has more than one outgoing edge on the same symbol. The
    /// latter also covers two structurally equal edges.
    pub fn is_nfa(&self) -> bool {
        if self.is_accept_sym(&Label::Epsilon) {
            return true;
        }

        self.graph.node_indices().any(|node| {
            !self
                .graph
                .edges_directed(node, Direction::Outgoing)
                .map(|edge| edge.weight().input())
                .all_unique()
        })
    }

    /// Converts the graph into an equivalent deterministic one, using the
    /// default [DeterminizeConfig]. The flag is `true` if the graph already was
    /// deterministic and the result is just a copy.
    pub fn to_dfa(&self, ctx: &mut AutomatonContext) -> GraphResult<(Graph, bool)> {
        Determinizer::new(self, DeterminizeConfig::default()).run(ctx)
    }

    pub fn vertex_size(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_size(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn start(&self) -> Option<&Vertex> {
        self.start.and_then(|id| self.vertex(id))
    }

    pub fn start_id(&self) -> Option<VertexId> {
        self.start
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index
            .get(&id)
            .and_then(|&node| self.graph.node_weight(node))
    }

    /// All vertices, in arena order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    /// All edges, in arena order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// The finish vertices, in arena order.
    pub fn finish(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices().filter(move |v| self.is_finish_id(v.id()))
    }

    pub fn finish_size(&self) -> usize {
        self.finish.len()
    }

    /// The outgoing edges of a vertex. Empty if the vertex is not a member.
    pub fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertex_index.get(&vertex).into_iter().flat_map(move |&node| {
            self.graph
                .edges_directed(node, Direction::Outgoing)
                .map(|edge| edge.weight())
        })
    }

    /// The incoming edges of a vertex. Empty if the vertex is not a member.
    pub fn incoming_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertex_index.get(&vertex).into_iter().flat_map(move |&node| {
            self.graph
                .edges_directed(node, Direction::Incoming)
                .map(|edge| edge.weight())
        })
    }

    fn node_of(&self, vertex: VertexId) -> GraphResult<NodeIndex> {
        self.vertex_index
            .get(&vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                graph: self.name.clone(),
                vertex,
            })
    }
}

impl Alphabet for Graph {
    fn alphabet(&self) -> &[Label] {
        &self.alphabet
    }
}

/// Two graphs are equal if they share name, vertices and edges.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.vertex_index.len() == other.vertex_index.len()
            && self.edge_index.len() == other.edge_index.len()
            && self
                .vertex_index
                .keys()
                .all(|id| other.vertex_index.contains_key(id))
            && self
                .edge_index
                .keys()
                .all(|id| other.edge_index.contains_key(id))
    }
}

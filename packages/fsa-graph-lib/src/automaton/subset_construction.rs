use hashbrown::HashMap;
use itertools::Itertools;

use crate::{
    automaton::{
        Alphabet,
        closure::VertexSet,
        context::AutomatonContext,
        edge::Label,
        error::{GraphError, GraphResult},
        graph::Graph,
        vertex::{Status, Vertex},
    },
    config::DeterminizeConfig,
};

/// One DFA state discovered during subset construction.
#[derive(Debug, Clone)]
struct SubsetRecord {
    subset: VertexSet,
    accepting: bool,
}

/// A deterministic transition between two records, by index.
#[derive(Debug, Clone)]
struct SubsetTransition {
    from: usize,
    symbol: Label,
    to: usize,
}

/// Turns a graph into an equivalent deterministic graph by subset
/// construction. Every vertex of the result stands for an epsilon closed set of
/// vertices of the source graph.
pub struct Determinizer<'g> {
    graph: &'g Graph,
    config: DeterminizeConfig,
}

impl<'g> Determinizer<'g> {
    pub fn new(graph: &'g Graph, config: DeterminizeConfig) -> Self {
        Determinizer { graph, config }
    }

    /// Runs the construction. New vertices and edges are taken from `ctx`.
    ///
    /// Returns the deterministic graph and `true` if the source already was
    /// deterministic, in which case the result is a copy of it. Fails if a
    /// conversion is needed but the source has no start vertex.
    pub fn run(&self, ctx: &mut AutomatonContext) -> GraphResult<(Graph, bool)> {
        if !self.graph.is_nfa() {
            tracing::info!(
                "Graph `{}` is already deterministic, no conversion needed",
                self.graph.name()
            );
            return Ok((self.graph.clone(), true));
        }

        let (records, transitions) = self.explore()?;
        let dfa = self.materialize(ctx, &records, &transitions)?;

        tracing::info!(
            "Determinized `{}`: {} vertices, {} edges -> {} vertices, {} edges",
            self.graph.name(),
            self.graph.vertex_size(),
            self.graph.edge_size(),
            dfa.vertex_size(),
            dfa.edge_size()
        );

        Ok((dfa, false))
    }

    /// Discovers all subsets reachable from the closure of the start vertex.
    /// The first record is always the start subset.
    fn explore(&self) -> GraphResult<(Vec<SubsetRecord>, Vec<SubsetTransition>)> {
        let start = self.graph.start_id().ok_or_else(|| GraphError::MissingStart {
            graph: self.graph.name().to_string(),
        })?;

        let symbols = self.graph.symbols();

        let start_subset = self.graph.epsilon_closure(&VertexSet::from([start]));
        let mut seen = HashMap::new();
        seen.insert(start_subset.clone(), 0);
        let mut records = vec![self.record(start_subset)];
        let mut transitions = vec![];

        // records are only ever appended, so everything before `current` has
        // been visited and everything after it still has to be
        let mut current = 0;
        while current < records.len() {
            let subset = records[current].subset.clone();

            for symbol in &symbols {
                let target = self.graph.advance(symbol, &subset)?;

                if target.is_empty() && !*self.config.get_dead_state() {
                    continue;
                }

                let to = match seen.get(&target) {
                    Some(&index) => index,
                    None => {
                        let index = records.len();
                        tracing::debug!(
                            "New subset #{} {} via `{}`{}",
                            index,
                            self.subset_name(&target),
                            symbol,
                            if target.is_empty() { " (dead state)" } else { "" }
                        );
                        seen.insert(target.clone(), index);
                        records.push(self.record(target));
                        index
                    }
                };

                transitions.push(SubsetTransition {
                    from: current,
                    symbol: symbol.clone(),
                    to,
                });
            }

            current += 1;
        }

        Ok((records, transitions))
    }

    /// Builds the output graph with one fresh vertex per record and one fresh
    /// edge per transition.
    fn materialize(
        &self,
        ctx: &mut AutomatonContext,
        records: &[SubsetRecord],
        transitions: &[SubsetTransition],
    ) -> GraphResult<Graph> {
        let mut dfa = Graph::new(format!("{}-dfa", self.graph.name()));

        let vertices: Vec<Vertex> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                // a single start vertex is required, so start wins over finish
                let status = if index == 0 {
                    Status::Start
                } else if record.accepting {
                    Status::Finish
                } else {
                    Status::Continue
                };
                ctx.vertex(self.subset_name(&record.subset), status)
            })
            .collect();

        for vertex in &vertices {
            dfa.add_vertex(vertex);
        }

        if records[0].accepting {
            dfa.add_finish(&vertices[0])?;
        }

        for transition in transitions {
            let edge = ctx.edge(
                &vertices[transition.from],
                &vertices[transition.to],
                transition.symbol.clone(),
            );
            dfa.add_edge(&edge)?;
        }

        Ok(dfa)
    }

    fn record(&self, subset: VertexSet) -> SubsetRecord {
        SubsetRecord {
            accepting: self.graph.contains_finish(&subset),
            subset,
        }
    }

    /// A readable name for a subset, e.g. `{v1,v3}`.
    fn subset_name(&self, subset: &VertexSet) -> String {
        format!(
            "{{{}}}",
            subset
                .iter()
                .map(|&id| match self.graph.vertex(id) {
                    Some(vertex) => vertex.name().to_string(),
                    None => format!("#{}", id),
                })
                .join(",")
        )
    }
}

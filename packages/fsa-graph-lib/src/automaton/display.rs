use std::fmt::Display;

use itertools::Itertools;

use crate::automaton::{Alphabet, graph::Graph};

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:{{")?;
        writeln!(f, "name: {}", self.name())?;
        match self.start() {
            Some(start) => writeln!(f, "start: {}", start)?,
            None => writeln!(f, "start: -")?,
        }
        writeln!(f, "finish: {}", self.finish().join(" "))?;
        writeln!(f, "alphabet: {}", self.alphabet().iter().join("\t"))?;

        for vertex in self.vertices() {
            writeln!(f, "{}", vertex)?;
            for edge in self.outgoing_edges(vertex.id()) {
                writeln!(f, "  {}", edge)?;
            }
        }

        write!(f, "}}")
    }
}

impl Graph {
    /// Renders the graph in the dot format of graphviz.
    pub fn to_graphviz(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph finite_state_machine {\n");
        dot.push_str("fontname=\"Helvetica,Arial,sans-serif\"\n");
        dot.push_str("node [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("edge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("rankdir=LR;\n");
        dot.push_str("node [shape=point,label=\"\"]START\n");

        dot.push_str(&format!(
            "node [shape = doublecircle]; {};\n",
            self.finish().map(|vertex| vertex.id()).join(" ")
        ));
        dot.push_str("node [shape = circle];\n");

        if let Some(start) = self.start_id() {
            dot.push_str(&format!("START -> {};\n", start));
        }

        for vertex in self.vertices() {
            dot.push_str(&format!(
                "{} [ label={:?} ];\n",
                vertex.id(),
                vertex.name()
            ));
        }

        for edge in self.edges() {
            let label = if edge.cost() != 0.0 {
                format!("{} ({})", edge.input(), edge.cost())
            } else {
                edge.input().to_string()
            };

            dot.push_str(&format!(
                "{} -> {} [ label={:?} ];\n",
                edge.start(),
                edge.end(),
                label
            ));
        }

        dot.push_str("}\n");

        dot
    }
}

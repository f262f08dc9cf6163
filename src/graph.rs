//! Directed graph of account updates, written as Graphviz DOT

use crate::{
    constants::{GRAPH_ID, GRAPH_TITLE_FONT_SIZE, GRAPH_TITLE_LOC, NODE_FONT_NAME},
    inspect::inspect,
    normalize::{NormalizedNode, NormalizedTxn},
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub title: String,
    pub nodes: Vec<GraphNode>,

    /// `(parent, child)` node ids
    pub edges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: usize,

    /// Left-justified lines, each terminated by `\l`
    pub label: String,
}

/// Builds the graph of `txn`, titled with its name.
///
/// Node ids are assigned in pre-order starting at 0.
pub fn make_graph(txn: &NormalizedTxn) -> Graph {
    let mut graph = Graph {
        title: txn.name.clone(),
        nodes: vec![],
        edges: vec![],
    };
    graph.add_nodes(&txn.account_updates, None);
    graph
}

impl Graph {
    fn add_nodes(&mut self, account_updates: &[NormalizedNode], parent: Option<usize>) {
        for au in account_updates {
            let id = self.nodes.len();
            self.nodes.push(GraphNode {
                id,
                label: node_label(au),
            });

            if let Some(parent) = parent {
                self.edges.push((parent, id));
            }
            self.add_nodes(&au.children, Some(id));
        }
    }

    pub fn to_dot(&self) -> String {
        let mut dot = format!("digraph {GRAPH_ID} {{\n");
        dot.push_str(&format!("  label=\"{}\";\n", escape(&self.title)));
        dot.push_str(&format!("  labelloc=\"{GRAPH_TITLE_LOC}\";\n"));
        dot.push_str(&format!("  fontsize=\"{GRAPH_TITLE_FONT_SIZE}\";\n"));

        for node in &self.nodes {
            // label is already escaped
            dot.push_str(&format!(
                "  \"{}\" [label=\"{}\", fontname=\"{NODE_FONT_NAME}\"];\n",
                node.id, node.label
            ));
        }
        for (parent, child) in &self.edges {
            dot.push_str(&format!("  \"{parent}\" -> \"{child}\";\n"));
        }

        dot.push_str("}\n");
        dot
    }
}

/// Field dump of `au` without the enclosing braces, one `\l` per line
pub fn node_label(au: &NormalizedNode) -> String {
    let dump = inspect(&Value::Object(au.label_fields()), false).replace('"', "'");
    let lines: Vec<&str> = dump.lines().collect();
    let body = if lines.len() > 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[][..]
    };

    let mut label = body
        .iter()
        .map(|line| line.replace('\\', "\\\\"))
        .collect::<Vec<_>>()
        .join("\\l");
    label.push_str("\\l");
    label
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

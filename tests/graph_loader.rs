#![allow(dead_code)]

use petgraph::graph::{DiGraph, NodeIndex};
use shortest_path::Graph;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn read_edge_list(path: &Path) -> Graph<String> {
    let text = fs::read_to_string(path).unwrap();
    Graph::parse_edge_list(&text).unwrap()
}

pub fn read_edge_list_for_petgraph(path: &Path) -> (DiGraph<String, f64>, HashMap<String, NodeIndex>) {
    let text = fs::read_to_string(path).unwrap();
    let mut graph = DiGraph::new();
    let mut node_map = HashMap::new();

    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() || parts[0].starts_with('#') {
            continue;
        }

        let weight = parts.get(2).map(|w| w.parse::<f64>().unwrap()).unwrap_or(1.0);
        let from = *node_map
            .entry(parts[0].to_string())
            .or_insert_with(|| graph.add_node(parts[0].to_string()));
        let to = *node_map
            .entry(parts[1].to_string())
            .or_insert_with(|| graph.add_node(parts[1].to_string()));
        graph.add_edge(from, to, weight);
    }
    (graph, node_map)
}

/// Same edges in both representations, vertices `0..n`.
pub fn petgraph_twin(graph: &Graph<usize>, n: usize) -> (DiGraph<usize, f64>, Vec<NodeIndex>) {
    let mut pg_graph = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..n).map(|i| pg_graph.add_node(i)).collect();
    for edge in graph.edges() {
        pg_graph.add_edge(nodes[edge.start], nodes[edge.end], edge.cost);
    }
    (pg_graph, nodes)
}

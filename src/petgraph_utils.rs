use crate::{Edge, Graph, ShortestPath};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::fmt::Debug;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

fn from_petgraph<G>(graph: G) -> Graph<G::NodeId>
where
    G: IntoEdgeReferences,
    G::NodeId: Eq + Hash + Clone,
    G::EdgeWeight: Into<f64> + Copy,
{
    Graph::new(
        graph
            .edge_references()
            .map(|edge| Edge::new(edge.source(), edge.target(), (*edge.weight()).into())),
    )
}

/// Cheapest path between two nodes of any [`petgraph`] graph, using this
/// crate's search. `None` when `goal` cannot be reached.
pub fn shortest_path<G>(graph: G, start: G::NodeId, goal: G::NodeId) -> Option<(f64, Vec<G::NodeId>)>
where
    G: IntoEdgeReferences,
    G::NodeId: Eq + Hash + Clone + Debug,
    G::EdgeWeight: Into<f64> + Copy,
{
    if start == goal {
        return Some((0.0, vec![start]));
    }

    let our_graph = from_petgraph(graph);
    // A node without edges is not a vertex here, and reaches nothing.
    ShortestPath::new(&our_graph).solve(&start, &goal).ok().flatten()
}

/// Distances from `start` to every node it reaches, `start` included.
pub fn distances<G>(graph: G, start: G::NodeId) -> HashMap<G::NodeId, f64>
where
    G: IntoEdgeReferences,
    G::NodeId: Eq + Hash + Clone + Debug,
    G::EdgeWeight: Into<f64> + Copy,
{
    let our_graph = from_petgraph(graph);
    ShortestPath::new(&our_graph)
        .distances(&start)
        .unwrap_or_else(|_| HashMap::from_iter([(start, 0.0)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::Graph;

    fn diamond() -> (Graph<(), f64>, Vec<petgraph::graph::NodeIndex>) {
        let mut pg_graph = Graph::new();
        let a = pg_graph.add_node(()); // 0
        let b = pg_graph.add_node(()); // 1
        let c = pg_graph.add_node(()); // 2
        let d = pg_graph.add_node(()); // 3
        let e = pg_graph.add_node(()); // 4, isolated

        pg_graph.add_edge(a, b, 1.0);
        pg_graph.add_edge(a, c, 4.0);
        pg_graph.add_edge(b, c, 2.0);
        pg_graph.add_edge(b, d, 5.0);
        pg_graph.add_edge(c, d, 1.0);

        (pg_graph, vec![a, b, c, d, e])
    }

    #[test]
    fn shortest_path_with_petgraph() {
        let (pg_graph, n) = diamond();
        let result = shortest_path(&pg_graph, n[0], n[3]);

        assert_eq!(result, Some((4.0, vec![n[0], n[1], n[2], n[3]])));
    }

    #[test]
    fn shortest_path_to_isolated_node() {
        let (pg_graph, n) = diamond();

        assert_eq!(shortest_path(&pg_graph, n[0], n[4]), None);
        assert_eq!(shortest_path(&pg_graph, n[4], n[0]), None);
        assert_eq!(shortest_path(&pg_graph, n[4], n[4]), Some((0.0, vec![n[4]])));
    }

    #[test]
    fn distances_with_petgraph() {
        let (pg_graph, n) = diamond();
        let result = distances(&pg_graph, n[0]);

        assert_eq!(result.len(), 4);
        assert_eq!(result.get(&n[3]), Some(&4.0));
        assert_eq!(distances(&pg_graph, n[4]).len(), 1);
    }
}

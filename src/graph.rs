use crate::error::{GraphError, Result};
use crate::utils::DEFAULT_COST;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

#[cfg(not(feature = "hashbrown"))]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "hashbrown")]
use hashbrown::{HashMap, HashSet};

/// A directed, weighted connection. An undirected connection is stored as
/// two edges with swapped endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub start: V,
    pub end: V,
    pub cost: f64,
}

impl<V> Edge<V> {
    pub fn new(start: V, end: V, cost: f64) -> Self {
        Edge { start, end, cost }
    }
}

impl<V: PartialEq> Edge<V> {
    fn connects(&self, start: &V, end: &V) -> bool {
        &self.start == start && &self.end == end
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((start, end): (V, V)) -> Self {
        Edge::new(start, end, DEFAULT_COST)
    }
}

impl<V> From<(V, V, f64)> for Edge<V> {
    fn from((start, end, cost): (V, V, f64)) -> Self {
        Edge::new(start, end, cost)
    }
}

/// One entry of the adjacency mapping: a vertex reachable over a single
/// outgoing edge, with that edge's cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<V> {
    pub vertex: V,
    pub cost: f64,
}

/// A graph stored as its edge sequence.
///
/// The vertex set and adjacency mapping are derived from the edges on every
/// call, so they can never go stale after [`Graph::add_edge`] or
/// [`Graph::remove_edge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V> {
    edges: Vec<Edge<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph { edges: Vec::new() }
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Builds a graph from `(start, end)` or `(start, end, cost)` tuples.
    /// Omitted costs default to 1. Duplicate edges are kept.
    pub fn new<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        Graph {
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All distinct endpoints of the current edges.
    pub fn vertices(&self) -> HashSet<V> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.start.clone(), edge.end.clone()])
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.edges
            .iter()
            .any(|edge| &edge.start == vertex || &edge.end == vertex)
    }

    /// Distinct vertices in the order they first appear in the edge
    /// sequence, start before end.
    pub fn discovery_order(&self) -> Vec<V> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for edge in &self.edges {
            for vertex in [&edge.start, &edge.end] {
                if seen.insert(vertex.clone()) {
                    order.push(vertex.clone());
                }
            }
        }
        order
    }

    /// Maps every vertex to the `(neighbor, cost)` pairs of its outgoing
    /// edges. Vertices without outgoing edges map to an empty list, and
    /// identical pairs are listed once.
    pub fn neighbors(&self) -> HashMap<V, Vec<Neighbor<V>>> {
        let mut neighbors: HashMap<V, Vec<Neighbor<V>>> = self
            .vertices()
            .into_iter()
            .map(|vertex| (vertex, Vec::new()))
            .collect();

        // Adding 0.0 folds -0.0 into 0.0 so both key the same pair.
        let mut seen = HashSet::new();
        for edge in &self.edges {
            let key = (edge.start.clone(), edge.end.clone(), (edge.cost + 0.0).to_bits());
            if !seen.insert(key) {
                continue;
            }
            if let Some(list) = neighbors.get_mut(&edge.start) {
                list.push(Neighbor {
                    vertex: edge.end.clone(),
                    cost: edge.cost,
                });
            }
        }

        neighbors
    }

    fn node_pairs(n1: &V, n2: &V, both_ends: bool) -> Vec<(V, V)> {
        if both_ends {
            vec![(n1.clone(), n2.clone()), (n2.clone(), n1.clone())]
        } else {
            vec![(n1.clone(), n2.clone())]
        }
    }

    /// Appends `n1 -> n2` (and `n2 -> n1` when `both_ends` is set).
    ///
    /// Fails with [`GraphError::DuplicateEdge`] and leaves the graph untouched
    /// if any of those directed pairs is already present.
    pub fn add_edge(&mut self, n1: V, n2: V, cost: f64, both_ends: bool) -> Result<()>
    where
        V: Debug,
    {
        let pairs = Self::node_pairs(&n1, &n2, both_ends);
        if let Some(existing) = self
            .edges
            .iter()
            .find(|edge| pairs.iter().any(|(start, end)| edge.connects(start, end)))
        {
            return Err(GraphError::DuplicateEdge {
                start: format!("{:?}", existing.start),
                end: format!("{:?}", existing.end),
            });
        }

        self.edges.push(Edge::new(n1.clone(), n2.clone(), cost));
        if both_ends {
            self.edges.push(Edge::new(n2, n1, cost));
        }
        Ok(())
    }

    /// Undirected connection with the default cost.
    pub fn connect(&mut self, n1: V, n2: V) -> Result<()>
    where
        V: Debug,
    {
        self.add_edge(n1, n2, DEFAULT_COST, true)
    }

    /// Removes every edge `n1 -> n2` (and `n2 -> n1` when `both_ends` is set).
    /// Returns how many edges were dropped; zero is not an error.
    pub fn remove_edge(&mut self, n1: &V, n2: &V, both_ends: bool) -> usize {
        let pairs = Self::node_pairs(n1, n2, both_ends);
        let before = self.edges.len();
        self.edges
            .retain(|edge| !pairs.iter().any(|(start, end)| edge.connects(start, end)));
        before - self.edges.len()
    }

    /// Converts into a [`petgraph::Graph`], with nodes added in discovery
    /// order. Also returns the vertex to node index mapping.
    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(
        &self,
    ) -> (
        petgraph::Graph<V, f64>,
        HashMap<V, petgraph::graph::NodeIndex>,
    ) {
        let mut pg_graph = petgraph::Graph::new();
        let mut nodes = HashMap::new();

        for vertex in self.discovery_order() {
            let index = pg_graph.add_node(vertex.clone());
            nodes.insert(vertex, index);
        }

        for edge in &self.edges {
            pg_graph.add_edge(nodes[&edge.start], nodes[&edge.end], edge.cost);
        }
        (pg_graph, nodes)
    }
}

impl Graph<String> {
    /// Builds a graph from loosely-typed records, each holding the start,
    /// the end and optionally the cost of one edge.
    ///
    /// Record positions in errors are 1-based.
    pub fn try_from_records<I, R, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut edges = Vec::new();
        for (i, record) in records.into_iter().enumerate() {
            let fields: Vec<&str> = record.as_ref().iter().map(|field| field.as_ref()).collect();
            edges.push(edge_from_fields(i + 1, &fields)?);
        }
        Ok(Graph { edges })
    }

    /// Parses a whitespace-separated edge list: `start end [cost]` per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse_edge_list(text: &str) -> Result<Self> {
        let mut edges = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            edges.push(edge_from_fields(i + 1, &fields)?);
        }
        Ok(Graph { edges })
    }
}

impl FromStr for Graph<String> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Graph::parse_edge_list(s)
    }
}

fn edge_from_fields(line: usize, fields: &[&str]) -> Result<Edge<String>> {
    match *fields {
        [start, end] => Ok(Edge::new(start.to_string(), end.to_string(), DEFAULT_COST)),
        [start, end, cost] => {
            let cost = cost
                .parse::<f64>()
                .ok()
                .filter(|c| !c.is_nan())
                .ok_or_else(|| GraphError::InvalidCost {
                    line,
                    value: cost.to_string(),
                })?;
            Ok(Edge::new(start.to_string(), end.to_string(), cost))
        }
        _ => Err(GraphError::InvalidEdgeFormat {
            line,
            fields: fields.len(),
        }),
    }
}

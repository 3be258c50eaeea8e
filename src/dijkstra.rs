use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::utils::{INFINITY, VertexDistance};
use log::{debug, trace, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

/// Single-source shortest paths over a borrowed [`Graph`].
///
/// Every query runs a fresh Dijkstra search; nothing is shared between
/// queries and the graph is never mutated. When several unsettled vertices
/// have the same tentative distance, the one discovered first in the edge
/// sequence is settled first. This only decides which of several equal-cost
/// paths is returned, never the cost.
///
/// Edge costs must be non-negative. Negative costs are not rejected, but
/// the result may then be non-minimal.
pub struct ShortestPath<'g, V> {
    graph: &'g Graph<V>,
}

/// Per-query search state, indexed by discovery order.
struct Search<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl<'g, V> ShortestPath<'g, V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new(graph: &'g Graph<V>) -> Self {
        ShortestPath { graph }
    }

    /// Vertices on a cheapest path from `source` to `destination`, both
    /// included. Empty when `destination` cannot be reached.
    pub fn find(&self, source: &V, destination: &V) -> Result<Vec<V>> {
        Ok(self
            .solve(source, destination)?
            .map(|(_, path)| path)
            .unwrap_or_default())
    }

    /// Like [`ShortestPath::find`], but also returns the path cost, and
    /// `None` instead of an empty path.
    pub fn solve(&self, source: &V, destination: &V) -> Result<Option<(f64, Vec<V>)>> {
        let search = self.search(source)?;

        let Some(&goal) = search.index.get(destination) else {
            return Ok(None);
        };
        if search.distances[goal] == INFINITY {
            return Ok(None);
        }

        let path = search.reconstruct_path(goal);
        if path.is_empty() {
            return Ok(None);
        }
        Ok(Some((
            search.distances[goal],
            path.into_iter().map(|i| search.vertices[i].clone()).collect(),
        )))
    }

    /// Final distance of every vertex reachable from `source`.
    pub fn distances(&self, source: &V) -> Result<HashMap<V, f64>> {
        let search = self.search(source)?;

        let mut results = HashMap::new();
        for (vertex, &distance) in search.vertices.iter().zip(&search.distances) {
            if distance != INFINITY {
                results.insert(vertex.clone(), distance);
            }
        }
        Ok(results)
    }

    fn search(&self, source: &V) -> Result<Search<V>> {
        let vertices = self.graph.discovery_order();
        let index: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (vertex.clone(), i))
            .collect();

        let source = *index
            .get(source)
            .ok_or_else(|| GraphError::UnknownSourceVertex(format!("{:?}", source)))?;

        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (vertex, neighbors) in self.graph.neighbors() {
            adjacency[index[&vertex]] = neighbors
                .into_iter()
                .map(|neighbor| (index[&neighbor.vertex], neighbor.cost))
                .collect::<Vec<(usize, f64)>>();
        }

        let n = vertices.len();
        let mut distances = vec![INFINITY; n];
        let mut predecessors = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0;
        let mut heap = BinaryHeap::new();

        debug!("Searching from {:?} over {} vertices", vertices[source], n);

        distances[source] = 0.0;
        heap.push(Reverse(VertexDistance::new(source, 0.0)));

        // Only finite distances enter the heap, so an empty heap means the
        // rest of the frontier is unreachable.
        while let Some(Reverse(VertexDistance { vertex: u, distance })) = heap.pop() {
            if settled[u] || distance > distances[u] {
                continue;
            }
            trace!("Settling {:?} at {}", vertices[u], distance);

            // distances[u] rather than the popped value: a negative self-loop
            // may lower it part way through the neighbor list.
            for &(v, cost) in &adjacency[u] {
                if cost < 0.0 {
                    warn!(
                        "Negative edge cost {} on {:?} -> {:?}, result may not be minimal",
                        cost, vertices[u], vertices[v]
                    );
                }

                let candidate = distances[u] + cost;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);

                    if !settled[v] {
                        heap.push(Reverse(VertexDistance::new(v, candidate)));
                    }
                }
            }

            settled[u] = true;
            settled_count += 1;
        }

        debug!(
            "Search from {:?} settled {} of {} vertices",
            vertices[source], settled_count, n
        );

        Ok(Search {
            vertices,
            index,
            source,
            distances,
            predecessors,
        })
    }
}

impl<V> Search<V> {
    /// Walks predecessor links back from `goal`. Returns an empty path when
    /// the walk ends anywhere but the source.
    fn reconstruct_path(&self, goal: usize) -> Vec<usize> {
        let mut path = VecDeque::new();
        let mut current = goal;
        path.push_front(current);

        while let Some(prev) = self.predecessors[current] {
            // Only reachable through negative costs.
            if path.len() > self.vertices.len() {
                warn!("Predecessor cycle while rebuilding path, dropping it");
                return Vec::new();
            }
            path.push_front(prev);
            current = prev;
        }

        if current == self.source {
            path.into()
        } else {
            Vec::new()
        }
    }
}

/// Shortest path from `source` to `destination` in `graph`.
///
/// Fails with [`GraphError::UnknownSourceVertex`] when `source` is not an
/// endpoint of any edge. An unreachable destination yields an empty path.
pub fn find<V>(graph: &Graph<V>, source: &V, destination: &V) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    ShortestPath::new(graph).find(source, destination)
}

/// Total cost of walking `path`, taking the cheapest edge for every hop.
/// `None` if the path is empty, starts outside the graph, or some hop has
/// no edge.
pub fn path_cost<V>(graph: &Graph<V>, path: &[V]) -> Option<f64>
where
    V: Eq + Hash + Clone,
{
    let first = path.first()?;
    if !graph.contains_vertex(first) {
        return None;
    }

    path.windows(2).try_fold(0.0, |total, hop| {
        graph
            .edges()
            .iter()
            .filter(|edge| edge.start == hop[0] && edge.end == hop[1])
            .map(|edge| edge.cost)
            .reduce(f64::min)
            .map(|cost| total + cost)
    })
}

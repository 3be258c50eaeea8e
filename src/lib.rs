//! Dijkstra shortest paths with path reconstruction.
//!
//! Build a [`Graph`] from weighted edges, then ask [`find`] or
//! [`ShortestPath`] for the cheapest route between two vertices.
//!
//! ```
//! use shortest_path::{Graph, find};
//!
//! let graph = Graph::new([("a", "b", 2.0), ("b", "c", 1.0), ("a", "c", 5.0)]);
//! assert_eq!(find(&graph, &"a", &"c").unwrap(), vec!["a", "b", "c"]);
//! ```
pub mod dijkstra;
pub mod error;
pub mod graph;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod utils;

pub use dijkstra::{ShortestPath, find, path_cost};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Neighbor};

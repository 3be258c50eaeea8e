use crate::dijkstra::ShortestPath;
use crate::error::Result;
use rayon::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

impl<'g, V> ShortestPath<'g, V>
where
    V: Eq + Hash + Clone + Debug + Send + Sync,
{
    /// Runs one [`ShortestPath::find`] per `(source, destination)` pair on
    /// the rayon pool. Results come back in the order of `pairs`.
    pub fn find_many(&self, pairs: &[(V, V)]) -> Vec<Result<Vec<V>>> {
        pairs
            .par_iter()
            .map(|(source, destination)| self.find(source, destination))
            .collect()
    }

    /// Distance maps for several sources, keyed by source.
    pub fn distances_many(&self, sources: &[V]) -> Result<HashMap<V, HashMap<V, f64>>> {
        sources
            .par_iter()
            .map(|source| Ok((source.clone(), self.distances(source)?)))
            .collect::<Result<Vec<_>>>()
            .map(|rows| rows.into_iter().collect())
    }
}

use std::cmp::Ordering;

pub const INFINITY: f64 = f64::INFINITY;

/// Cost of an edge built without an explicit cost.
pub const DEFAULT_COST: f64 = 1.0;

/// Heap entry for the search frontier. `vertex` is the discovery index of
/// the vertex, so equal distances pop in discovery order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexDistance {
    pub vertex: usize,
    pub distance: f64,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: f64) -> Self {
        VertexDistance { vertex, distance }
    }
}

impl Eq for VertexDistance {}

#[allow(clippy::non_canonical_partial_ord_impl)]
impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.partial_cmp(&other.distance) {
            Some(Ordering::Equal) => Some(self.vertex.cmp(&other.vertex)),
            other => other,
        }
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

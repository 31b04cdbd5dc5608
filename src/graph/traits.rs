use std::fmt::Debug;
use std::str::FromStr;
use num_traits::{CheckedAdd, Unsigned, Zero};

use crate::graph::Vertex;

/// Bound for edge weights and path costs.
///
/// Weights are unsigned, so every graph the decoder can produce satisfies
/// the non-negative precondition of Dijkstra's algorithm.
pub trait Weight: Copy + Ord + Debug + Zero + CheckedAdd + Unsigned + FromStr + Send + Sync {}

impl<W> Weight for W where W: Copy + Ord + Debug + Zero + CheckedAdd + Unsigned + FromStr + Send + Sync {}

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex, in ascending letter order
    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: Vertex) -> Box<dyn Iterator<Item = (Vertex, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: Vertex) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: Vertex, to: Vertex) -> Option<W>;
}

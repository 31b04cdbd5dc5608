use std::collections::{BTreeMap, HashSet};
use log::warn;

use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` where unreachable
    pub distances: BTreeMap<Vertex, Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: BTreeMap<Vertex, Option<Vertex>>,

    /// Source vertex
    pub source: Vertex,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Cost of the cheapest path to `target`, `None` if unreachable or unknown
    pub fn distance(&self, target: Vertex) -> Option<W> {
        self.distances.get(&target).copied().flatten()
    }

    /// Vertex preceding `target` on its cheapest path
    pub fn predecessor(&self, target: Vertex) -> Option<Vertex> {
        self.predecessors.get(&target).copied().flatten()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    ///
    /// The predecessor chain is walked back from `target`; a path is returned
    /// only when that walk ends exactly at the source, never a partial one.
    fn get_path(&self, result: &ShortestPathResult<W>, target: Vertex) -> Option<Vec<Vertex>> {
        result.distance(target)?;

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        while current != result.source {
            if !visited.insert(current) {
                warn!("cycle in predecessor chain at vertex {}", current);
                return None;
            }

            path.push(current);
            // A vertex other than the source without a predecessor means the
            // chain is broken.
            current = result.predecessor(current)?;

            if path.len() > result.predecessors.len() {
                warn!("predecessor chain for {} is longer than the graph", target);
                return None;
            }
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}

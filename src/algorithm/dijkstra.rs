use std::collections::{BTreeMap, HashSet};
use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        // Every vertex starts unreached (infinite distance) with no predecessor
        let mut distances: BTreeMap<Vertex, Option<W>> = graph.vertices().map(|v| (v, None)).collect();
        let mut predecessors: BTreeMap<Vertex, Option<Vertex>> =
            graph.vertices().map(|v| (v, None)).collect();
        distances.insert(source, Some(W::zero()));

        let mut queue = MinQueue::new();
        queue.push(source, W::zero());
        let mut visited = HashSet::with_capacity(graph.vertex_count());
        let mut stale = 0usize;

        while let Some((u, cost_u)) = queue.pop() {
            // The queue has no decrease-key, so older entries for a settled
            // vertex are dropped here.
            if !visited.insert(u) {
                stale += 1;
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                // An overflowing sum is treated as infinite and never relaxes.
                let Some(candidate) = cost_u.checked_add(&weight) else {
                    continue;
                };

                let improves = match distances.get(&v).copied().flatten() {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances.insert(v, Some(candidate));
                    predecessors.insert(v, Some(u));
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "dijkstra from {}: settled {} of {} vertices, discarded {} stale entries",
            source,
            visited.len(),
            graph.vertex_count(),
            stale
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

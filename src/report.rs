//! Result record handed to callers and serialized to JSON

use rayon::prelude::*;
use serde::Serialize;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Vertex, Weight};

/// Cheapest route from the start vertex to one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry<W>
where
    W: Weight + Serialize,
{
    pub target: Vertex,
    /// Vertices from the start to `target` inclusive, `None` if unreachable
    pub path: Option<Vec<Vertex>>,
    /// Total weight of `path`, `None` if unreachable
    pub cost: Option<W>,
}

impl<W> PathEntry<W>
where
    W: Weight + Serialize,
{
    /// Returns true if the target can be reached from the start vertex
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}

/// Routes from one start vertex to every other vertex of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReport<W>
where
    W: Weight + Serialize,
{
    pub start_node: Vertex,
    /// One entry per vertex other than the start, in vertex order
    pub paths: Vec<PathEntry<W>>,
}

impl<W> PathReport<W>
where
    W: Weight + Serialize,
{
    /// Builds the report from a finished shortest path computation.
    ///
    /// Cost and path are reported together: an entry either has both or
    /// neither, so a target whose predecessor chain does not lead back to the
    /// start is reported as unreachable.
    pub fn from_result<A, G>(algorithm: &A, graph: &G, result: &ShortestPathResult<W>) -> Self
    where
        A: ShortestPathAlgorithm<W, G> + Sync,
        G: Graph<W>,
    {
        let targets: Vec<Vertex> = graph.vertices().filter(|v| *v != result.source).collect();

        let paths = targets
            .par_iter()
            .map(|&target| match algorithm.get_path(result, target) {
                Some(path) => PathEntry {
                    target,
                    path: Some(path),
                    cost: result.distance(target),
                },
                None => PathEntry {
                    target,
                    path: None,
                    cost: None,
                },
            })
            .collect();

        PathReport {
            start_node: result.source,
            paths,
        }
    }

    /// Drops the entries for targets that cannot be reached
    pub fn reachable_only(mut self) -> Self {
        self.paths.retain(PathEntry::is_reachable);
        self
    }

    /// Looks up the entry for `target`
    pub fn entry(&self, target: Vertex) -> Option<&PathEntry<W>> {
        self.paths.iter().find(|entry| entry.target == target)
    }

    /// Number of targets that can be reached from the start vertex
    pub fn reachable_count(&self) -> usize {
        self.paths.iter().filter(|entry| entry.is_reachable()).count()
    }
}

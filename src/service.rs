//! Request-level orchestration: validate the start vertex, decode the graph,
//! run the search and assemble the report.

use log::{debug, info};

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::{read_graph, Cost, Graph, Vertex};
use crate::report::PathReport;
use crate::{Error, Result};

/// Computes route reports from raw graph uploads
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteService {
    /// Reject inputs with dropped lines or tokens instead of skipping them
    strict: bool,
}

impl RouteService {
    /// Creates a permissive service
    pub fn new() -> Self {
        RouteService { strict: false }
    }

    /// Sets whether malformed lines or tokens fail the request
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Finds the cheapest path from `start` to every vertex of the uploaded graph.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingInput`] if `input` is `None`
    /// - [`Error::InvalidVertex`] if `start` is not a single letter
    /// - [`Error::MalformedInput`] in strict mode if anything was dropped
    /// - [`Error::SourceNotFound`] if `start` does not occur in the graph
    pub fn find_routes(&self, input: Option<&[u8]>, start: &str) -> Result<PathReport<Cost>> {
        let parsed = read_graph(input)?;
        let source = Vertex::parse(start).ok_or_else(|| Error::InvalidVertex(start.to_string()))?;

        if !parsed.is_clean() {
            debug!("{} diagnostic(s) while decoding graph", parsed.diagnostics.len());
        }
        let graph = if self.strict {
            parsed.into_strict()?
        } else {
            parsed.graph
        };

        let dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(&graph, source)?;
        let report = PathReport::from_result(&dijkstra, &graph, &result);

        info!(
            "routes from {}: {} vertices, {} edges, {} reachable targets",
            source,
            graph.vertex_count(),
            graph.edge_count(),
            report.reachable_count()
        );
        Ok(report)
    }
}

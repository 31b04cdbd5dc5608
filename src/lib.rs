//! Route Cost - single-source shortest paths over letter-labelled adjacency files
//!
//! Input is a line-oriented description such as
//!
//! ```text
//! A: B1, C4
//! B: C2, D5
//! C: D1
//! D:
//! ```
//!
//! where each line lists an origin vertex and its weighted destinations. The
//! library decodes that text into a directed graph, runs Dijkstra's algorithm
//! from a chosen vertex and reports the cheapest path and cost to every other
//! vertex.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod service;
pub mod web;

// Re-export main types for convenient use
pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use graph::{build_graph, parse_adjacency, AdjacencyGraph, Cost, ParseDiagnostic, Vertex};
pub use report::{PathEntry, PathReport};
pub use service::RouteService;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No graph input was supplied")]
    MissingInput,

    #[error("Graph input is malformed: {} line(s) or token(s) were rejected", diagnostics.len())]
    MalformedInput { diagnostics: Vec<ParseDiagnostic> },

    #[error("Invalid vertex: {0:?} (expected a single letter)")]
    InvalidVertex(String),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(Vertex),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

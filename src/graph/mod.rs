pub mod adjacency;
pub mod parser;
pub mod traits;
pub mod vertex;

pub use adjacency::AdjacencyGraph;
pub use parser::{build_graph, parse_adjacency, read_graph, DiagnosticKind, ParseDiagnostic, ParsedGraph};
pub use traits::{Graph, Weight};
pub use vertex::Vertex;

/// Edge weight type produced by the text decoder
pub type Cost = u64;

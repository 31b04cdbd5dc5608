use std::collections::BTreeMap;

use crate::graph::traits::{Graph, Weight};
use crate::graph::Vertex;

/// A directed graph stored as nested ordered adjacency maps
///
/// `adjacency[origin][destination] = weight`. Every vertex that was ever
/// registered has an entry, including sinks whose map is empty. Ordered maps
/// keep iteration, and therefore reports, deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W>
where
    W: Weight,
{
    adjacency: BTreeMap<Vertex, BTreeMap<Vertex, W>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph with its own adjacency storage
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from `(origin, destination, weight)` triples.
    ///
    /// Both endpoints of every edge are registered; a repeated pair keeps the
    /// weight of its last occurrence.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.insert_edge(from, to, weight);
        }
        graph
    }

    /// Registers a vertex with an empty adjacency if it is not present yet
    pub(crate) fn add_vertex(&mut self, vertex: Vertex) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Inserts or overwrites the edge `from -> to`
    pub(crate) fn insert_edge(&mut self, from: Vertex, to: Vertex, weight: W) {
        self.adjacency.entry(from).or_default().insert(to, weight);
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn outgoing_edges(&self, vertex: Vertex) -> Box<dyn Iterator<Item = (Vertex, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().map(|(target, weight)| (*target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn get_edge_weight(&self, from: Vertex, to: Vertex) -> Option<W> {
        self.adjacency.get(&from).and_then(|edges| edges.get(&to)).copied()
    }
}

//! Decoder for the line-oriented adjacency format
//!
//! ```text
//! file      := line ("\n" line)*
//! line      := "" | origin ":" ws destlist?
//! origin    := LETTER
//! destlist  := dest ("," ws dest)*
//! dest      := LETTER DIGIT+
//! ```
//!
//! Decoding is best effort: a line whose origin is not a single letter is
//! skipped, a destination token that is not `LETTER DIGIT+` is skipped, and
//! everything else is kept. Each skipped piece is recorded as a
//! [`ParseDiagnostic`] so callers that want strict validation can reject the
//! input through [`ParsedGraph::into_strict`].

use log::debug;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::graph::traits::Weight;
use crate::graph::{AdjacencyGraph, Cost, Vertex};
use crate::{Error, Result};

/// Why a piece of the input was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The line has no `:` between origin and destinations
    MissingSeparator,
    /// The text before `:` is not exactly one letter
    InvalidOrigin,
    /// A destination token is not a letter followed by digits
    InvalidToken,
    /// The digits of a destination token do not fit the weight type
    WeightOutOfRange,
}

/// A line or token that the decoder dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    /// 1-based line number
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The offending line or token, trimmed
    pub text: String,
}

impl ParseDiagnostic {
    fn new(line: usize, kind: DiagnosticKind, text: &str) -> Self {
        ParseDiagnostic {
            line,
            kind,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            DiagnosticKind::MissingSeparator => "missing ':' after origin",
            DiagnosticKind::InvalidOrigin => "origin is not a single letter",
            DiagnosticKind::InvalidToken => "destination is not a letter followed by digits",
            DiagnosticKind::WeightOutOfRange => "weight does not fit",
        };
        write!(f, "line {}: {} ({:?})", self.line, reason, self.text)
    }
}

/// A decoded graph together with everything that was dropped while decoding it
#[derive(Debug, Clone)]
pub struct ParsedGraph<W>
where
    W: Weight,
{
    pub graph: AdjacencyGraph<W>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl<W> ParsedGraph<W>
where
    W: Weight,
{
    /// Returns true if nothing in the input was dropped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the graph only if the input decoded without any diagnostics
    pub fn into_strict(self) -> Result<AdjacencyGraph<W>> {
        if self.diagnostics.is_empty() {
            Ok(self.graph)
        } else {
            Err(Error::MalformedInput {
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// An `ORIGIN:` line that passed the origin check
struct OriginLine<'a> {
    number: usize,
    origin: Vertex,
    tokens: Vec<&'a str>,
}

/// Decodes raw input bytes into a graph, keeping the diagnostics.
///
/// Fails only when `input` is absent. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn read_graph(input: Option<&[u8]>) -> Result<ParsedGraph<Cost>> {
    let bytes = input.ok_or(Error::MissingInput)?;
    let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
    Ok(parse_adjacency(&text))
}

/// Decodes raw input bytes into a graph.
///
/// Fails only when `input` is absent; malformed lines and tokens are dropped.
pub fn build_graph(input: Option<&[u8]>) -> Result<AdjacencyGraph<Cost>> {
    read_graph(input).map(|parsed| parsed.graph)
}

/// Decodes adjacency text into a graph.
///
/// Runs two passes over the accepted lines: the first registers every origin
/// and every well-formed destination so sinks are present even without
/// outgoing edges, the second inserts the edges. A repeated
/// `(origin, destination)` pair keeps its last weight.
pub fn parse_adjacency<W>(text: &str) -> ParsedGraph<W>
where
    W: Weight,
{
    let mut diagnostics = Vec::new();
    let lines = origin_lines(text, &mut diagnostics);
    let mut graph = AdjacencyGraph::new();

    for line in &lines {
        graph.add_vertex(line.origin);
        for (vertex, _) in line.tokens.iter().filter_map(|token| split_destination(token)) {
            graph.add_vertex(vertex);
        }
    }

    for line in &lines {
        for token in &line.tokens {
            let Some((vertex, digits)) = split_destination(token) else {
                diagnostics.push(ParseDiagnostic::new(line.number, DiagnosticKind::InvalidToken, token));
                continue;
            };
            match digits.parse::<W>() {
                Ok(weight) => graph.insert_edge(line.origin, vertex, weight),
                Err(_) => diagnostics.push(ParseDiagnostic::new(
                    line.number,
                    DiagnosticKind::WeightOutOfRange,
                    token,
                )),
            }
        }
    }

    // Stable sort: token diagnostics stay in input order within a line.
    diagnostics.sort_by_key(|diagnostic| diagnostic.line);
    for diagnostic in &diagnostics {
        debug!("dropped {}", diagnostic);
    }

    ParsedGraph { graph, diagnostics }
}

/// Splits the text into `ORIGIN:` lines, recording lines that fail the origin check
fn origin_lines<'a>(text: &'a str, diagnostics: &mut Vec<ParseDiagnostic>) -> Vec<OriginLine<'a>> {
    let mut lines = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((head, rest)) = line.split_once(':') else {
            diagnostics.push(ParseDiagnostic::new(number, DiagnosticKind::MissingSeparator, line));
            continue;
        };
        let Some(origin) = Vertex::parse(head) else {
            diagnostics.push(ParseDiagnostic::new(number, DiagnosticKind::InvalidOrigin, line));
            continue;
        };

        let tokens = rest
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        lines.push(OriginLine { number, origin, tokens });
    }

    lines
}

/// Splits `B12` into `(B, "12")`; `None` unless the token is a letter followed by digits
fn split_destination(token: &str) -> Option<(Vertex, &str)> {
    let mut chars = token.chars();
    let vertex = Vertex::new(chars.next()?)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((vertex, digits))
}

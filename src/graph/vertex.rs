use serde::{Serialize, Serializer};
use std::fmt;

/// A graph vertex, identified by a single ASCII letter.
///
/// Letters are case-sensitive: `a` and `A` are different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(char);

impl Vertex {
    /// Creates a vertex from a letter, or `None` if `c` is not an ASCII letter
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then_some(Vertex(c))
    }

    /// Parses a vertex from text that must hold exactly one letter.
    ///
    /// Surrounding whitespace is ignored, so `" A "` parses but `"AB"`,
    /// `"1"` and `""` do not.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Vertex::new(c),
            _ => None,
        }
    }

    /// The letter naming this vertex
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buf))
    }
}

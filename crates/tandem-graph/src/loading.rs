// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Text loader for weighted digraphs.
//!
//! The loader reads a whitespace-delimited arc list and produces a
//! `StaticDigraph` together with an `ArcMap` of lengths. Arc indices follow
//! the order of the lines in the input, which keeps results of order
//! sensitive algorithms reproducible across runs.
//!
//! Lines may contain comments introduced by `#`. Inputs are accepted from
//! any `BufRead`, a file path, a raw reader, or a string slice. Negative
//! lengths are rejected by default since the disjoint path algorithms
//! require non-negative lengths; this can be relaxed with
//! `allow_negative_lengths`.

use crate::{
    digraph::{DigraphBuilder, StaticDigraph},
    index::{ArcIndex, NodeIndex},
    map::ArcMap,
};
use num_traits::{PrimInt, Signed};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the graph loading process.
#[derive(Debug)]
pub enum GraphLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended before all announced arcs were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// An arc refers to a node outside `0..N`.
    NodeOutOfBounds(NodeOutOfBoundsError),
    /// An arc has a negative length and negative lengths are not allowed.
    NegativeLength(ArcIndex),
    /// The header announces more nodes than a graph can address.
    InvalidDimensions,
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about an arc endpoint that is not a node of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOutOfBoundsError {
    /// The arc whose endpoint is invalid.
    pub arc_index: ArcIndex,
    /// The raw node id found in the input.
    pub node: usize,
    /// The number of nodes announced in the header.
    pub num_nodes: usize,
}

impl std::fmt::Display for NodeOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arc {} refers to node {} but the graph has {} nodes",
            self.arc_index.get(),
            self.node,
            self.num_nodes
        )
    }
}

impl std::error::Error for NodeOutOfBoundsError {}

impl Display for GraphLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing graph"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::NodeOutOfBounds(e) => write!(f, "Invalid arc: {}", e),
            Self::NegativeLength(arc) => {
                write!(f, "Arc {} has a negative length", arc.get())
            }
            Self::InvalidDimensions => {
                write!(f, "Graph dimensions (N and M) exceed the addressable size")
            }
        }
    }
}

impl std::error::Error for GraphLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::NodeOutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GraphLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for GraphLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<NodeOutOfBoundsError> for GraphLoaderError {
    fn from(e: NodeOutOfBoundsError) -> Self {
        Self::NodeOutOfBounds(e)
    }
}

/// Upper bound on the number of arcs reserved up front. Larger graphs grow
/// their buffers while the arc lines are read.
const PREALLOCATION_LIMIT: usize = 1 << 16;

/// Largest node count whose CSR offset table still fits into a `Vec`.
const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<usize>() - 1;

/// A loaded graph together with its arc lengths.
pub type LoadedGraph<L> = (StaticDigraph, ArcMap<L>);

/// A configurable loader for weighted digraphs.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// N M          // number of nodes, number of arcs
/// u_1 v_1 l_1  // arc 0: source node, target node, length
/// ...
/// u_M v_M l_M  // arc M-1
/// ```
///
/// Nodes are numbered `0..N`.
///
/// # Configuration
/// * `allow_negative_lengths`: If false (the default), any negative length
///   aborts loading with `GraphLoaderError::NegativeLength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLoader<L> {
    allow_negative_lengths: bool,
    _marker: std::marker::PhantomData<L>,
}

impl<L> Default for GraphLoader<L> {
    fn default() -> Self {
        Self {
            allow_negative_lengths: false,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<L> GraphLoader<L>
where
    L: PrimInt + Signed + FromStr,
{
    /// Creates a new `GraphLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether negative arc lengths are accepted.
    #[inline]
    pub fn allow_negative_lengths(mut self, yes: bool) -> Self {
        self.allow_negative_lengths = yes;
        self
    }

    /// Loads a graph from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<LoadedGraph<L>, GraphLoaderError> {
        let mut sc = Scanner::new(rdr);

        let num_nodes: usize = sc.next()?;
        let num_arcs: usize = sc.next()?;

        if num_nodes > MAX_NODES {
            return Err(GraphLoaderError::InvalidDimensions);
        }

        let reserve = num_arcs.min(PREALLOCATION_LIMIT);
        let mut builder = DigraphBuilder::preallocated(num_nodes, reserve);
        let mut lengths = Vec::with_capacity(reserve);

        for i in 0..num_arcs {
            let arc_index = ArcIndex::new(i);
            let u: usize = sc.next()?;
            let v: usize = sc.next()?;
            let len: L = sc.next()?;

            for node in [u, v] {
                if node >= num_nodes {
                    return Err(GraphLoaderError::NodeOutOfBounds(NodeOutOfBoundsError {
                        arc_index,
                        node,
                        num_nodes,
                    }));
                }
            }

            if !self.allow_negative_lengths && len.is_negative() {
                return Err(GraphLoaderError::NegativeLength(arc_index));
            }

            let arc = builder.add_arc(NodeIndex::new(u), NodeIndex::new(v));
            debug_assert_eq!(arc, arc_index);
            lengths.push(len);
        }

        Ok((builder.build(), ArcMap::from_vec(lengths)))
    }

    /// Loads a graph from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadedGraph<L>, GraphLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a graph from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<LoadedGraph<L>, GraphLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a graph from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<LoadedGraph<L>, GraphLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens, skipping `#` comments.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, GraphLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, GraphLoaderError>
    where
        T: FromStr,
    {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Err(GraphLoaderError::UnexpectedEof);
            }

            let line = &self.buf[self.pos..];
            let content = match line.find('#') {
                Some(comment) => &line[..comment],
                None => line,
            };

            let Some(start) = content.find(|c: char| !c.is_whitespace()) else {
                self.pos = self.buf.len();
                continue;
            };
            let rest = &content[start..];
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let token = &rest[..end];
            self.pos += start + end;

            return token.parse::<T>().map_err(|_| {
                GraphLoaderError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::Digraph;

    const SQUARE: &str = r#"
        4 5         # nodes, arcs
        0 1 1       # s -> a
        1 3 1       # a -> t
        0 2 2       # s -> b
        2 3 2       # b -> t
        1 2 0       # a -> b
    "#;

    #[test]
    fn test_loads_arcs_in_input_order() {
        let (g, len) = GraphLoader::<i64>::new()
            .from_str(SQUARE)
            .expect("Failed to load");

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_arcs(), 5);
        assert_eq!(g.source(ArcIndex::new(2)), NodeIndex::new(0));
        assert_eq!(g.target(ArcIndex::new(2)), NodeIndex::new(2));
        assert_eq!(len.as_slice(), &[1, 1, 2, 2, 0]);
    }

    #[test]
    fn test_comment_glued_to_token() {
        let (g, len) = GraphLoader::<i32>::new()
            .from_str("2 1#header\n0 1 7#arc\n")
            .expect("Failed to load");
        assert_eq!(g.num_arcs(), 1);
        assert_eq!(len[ArcIndex::new(0)], 7);
    }

    #[test]
    fn test_negative_length_rejected_by_default() {
        let data = "2 2  0 1 3  1 0 -1";
        match GraphLoader::<i64>::new().from_str(data) {
            Err(GraphLoaderError::NegativeLength(arc)) => assert_eq!(arc.get(), 1),
            _ => panic!("Expected NegativeLength error"),
        }

        let (_, len) = GraphLoader::<i64>::new()
            .allow_negative_lengths(true)
            .from_str(data)
            .expect("negative lengths should be accepted when allowed");
        assert_eq!(len[ArcIndex::new(1)], -1);
    }

    #[test]
    fn test_node_out_of_bounds() {
        match GraphLoader::<i64>::new().from_str("2 1  0 2 1") {
            Err(GraphLoaderError::NodeOutOfBounds(e)) => {
                assert_eq!(e.arc_index.get(), 0);
                assert_eq!(e.node, 2);
                assert_eq!(e.num_nodes, 2);
            }
            _ => panic!("Expected NodeOutOfBounds error"),
        }
    }

    #[test]
    fn test_truncated_input() {
        let res = GraphLoader::<i64>::new().from_str("3 2  0 1 1  1");
        assert!(matches!(res, Err(GraphLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_huge_arc_count_reports_truncation() {
        let res = GraphLoader::<i64>::new().from_str("2 18446744073709551615\n0 1 1\n");
        assert!(matches!(res, Err(GraphLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_huge_node_count_is_rejected() {
        let res = GraphLoader::<i64>::new().from_str("18446744073709551615 1\n0 1 1\n");
        assert!(matches!(res, Err(GraphLoaderError::InvalidDimensions)));

        let res = GraphLoader::<i64>::new().from_str(&format!("{} 0\n", MAX_NODES + 1));
        assert!(matches!(res, Err(GraphLoaderError::InvalidDimensions)));
    }

    #[test]
    fn test_parse_error_structure() {
        match GraphLoader::<i64>::new().from_str("2 1  0 1 far") {
            Err(GraphLoaderError::Parse(e)) => {
                assert_eq!(e.token, "far");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_error_display() {
        let e = GraphLoaderError::NegativeLength(ArcIndex::new(4));
        assert_eq!(format!("{}", e), "Arc 4 has a negative length");
    }
}

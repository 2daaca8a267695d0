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

use tandem_graph::index::ArcIndex;

/// Errors reported when validating an arc length map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError<L> {
    /// The map does not hold exactly one length per arc.
    SizeMismatch { num_arcs: usize, len: usize },
    /// An arc carries a negative length.
    Negative { arc: ArcIndex, length: L },
}

impl<L> std::fmt::Display for LengthError<L>
where
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthError::SizeMismatch { num_arcs, len } => write!(
                f,
                "length map holds {} entries but the graph has {} arcs",
                len, num_arcs
            ),
            LengthError::Negative { arc, length } => {
                write!(f, "{} has negative length {}", arc, length)
            }
        }
    }
}

impl<L> std::error::Error for LengthError<L> where L: std::fmt::Debug + std::fmt::Display {}

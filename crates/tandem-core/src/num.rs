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

//! # Numeric Foundations
//!
//! Arc lengths, node potentials and heap priorities all share one integer
//! type. `LengthNumeric` collects the bounds that type needs into a single
//! alias so that generic signatures stay readable.
//!
//! Lengths must be *integers*. Reduced lengths are computed by adding and
//! subtracting potentials, and rounding would break the non-negativity of
//! reduced lengths on which the Dijkstra search relies. Floating point types
//! do not implement `PrimInt`, so the requirement is checked at compile time.
//!
//! The type must also be *signed*: reverse residual arcs carry the negated
//! length and potentials drift below zero as searches progress.

use num_traits::{PrimInt, Signed};

/// A trait alias for integer types usable as arc lengths.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::LengthNumeric;
/// fn sum<L: LengthNumeric>(values: &[L]) -> L {
///     values.iter().fold(L::zero(), |acc, &v| acc + v)
/// }
/// assert_eq!(sum(&[1i64, 2, 3]), 6);
/// ```
pub trait LengthNumeric:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> LengthNumeric for T where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

/// A trait for types that support saturating addition by value.
///
/// This mirrors the primitive `saturating_add`, exposed as a trait so that
/// counters can be incremented uniformly in generic code.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::num::SaturatingAddVal;
/// assert_eq!(250u8.saturating_add_val(10), 255);
/// assert_eq!(u64::MAX.saturating_add_val(1), u64::MAX);
/// ```
pub trait SaturatingAddVal: Sized {
    /// Adds `v`, clamping at the numeric bounds of the type.
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! saturating_add_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    <$t>::saturating_add(self, v)
                }
            }
        )*
    };
}

saturating_add_impl!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_length<L: LengthNumeric>(v: L) -> L {
        -v
    }

    #[test]
    fn test_signed_integers_are_lengths() {
        assert_eq!(requires_length(3i32), -3);
        assert_eq!(requires_length(3i64), -3);
        assert_eq!(requires_length(3isize), -3);
    }

    #[test]
    fn test_saturating_add_clamps() {
        assert_eq!(u32::MAX.saturating_add_val(5), u32::MAX);
        assert_eq!(i8::MIN.saturating_add_val(-1), i8::MIN);
        assert_eq!(7usize.saturating_add_val(3), 10);
    }
}

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

//! Owned or caller-supplied map storage.
//!
//! The flow and potential maps of `Suurballe` either belong to the instance
//! or are borrowed from the caller, who then sees every write the algorithm
//! makes and keeps the map after the instance is dropped.

/// A map that is either owned or mutably borrowed.
#[derive(Debug)]
pub enum MapStorage<'a, M> {
    Owned(M),
    Borrowed(&'a mut M),
}

impl<M> MapStorage<'_, M> {
    /// Returns `true` if the map is owned by this storage.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, MapStorage::Owned(_))
    }

    /// Returns `true` if the map is borrowed from the caller.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, MapStorage::Borrowed(_))
    }
}

impl<M> std::ops::Deref for MapStorage<'_, M> {
    type Target = M;

    #[inline(always)]
    fn deref(&self) -> &M {
        match self {
            MapStorage::Owned(map) => map,
            MapStorage::Borrowed(map) => map,
        }
    }
}

impl<M> std::ops::DerefMut for MapStorage<'_, M> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut M {
        match self {
            MapStorage::Owned(map) => map,
            MapStorage::Borrowed(map) => map,
        }
    }
}

// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the packer and a font rasterizer.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::GlyphBitmap;

/// Something that can rasterize characters into alpha masks.
///
/// Implementations typically wrap a font file at a fixed size. The packer
/// never calls this itself; [`rasterize_range`] collects a glyph set up
/// front, so the sizing pass and the packing pass see the same bitmaps.
pub trait GlyphSource {
    /// The error produced when a character cannot be rasterized.
    type Error;

    /// Rasterizes `code`.
    ///
    /// Characters the font has no outline for (such as the space) should be
    /// returned as [`GlyphBitmap::empty`], not as an error.
    fn rasterize(&mut self, code: char) -> Result<GlyphBitmap, Self::Error>;
}

impl<S: GlyphSource + ?Sized> GlyphSource for &mut S {
    type Error = S::Error;

    fn rasterize(&mut self, code: char) -> Result<GlyphBitmap, Self::Error> {
        (**self).rasterize(code)
    }
}

/// Rasterizes every character of `codes`, in ascending order.
pub fn rasterize_range<S: GlyphSource>(
    source: &mut S,
    codes: RangeInclusive<char>,
) -> Result<Vec<GlyphBitmap>, S::Error> {
    codes.map(|code| source.rasterize(code)).collect()
}

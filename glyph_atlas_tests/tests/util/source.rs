// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glyph_atlas::{GlyphBitmap, GlyphSource};

/// A solid glyph: every pixel fully covered.
pub(crate) fn solid(code: char, width: u32, height: u32) -> GlyphBitmap {
    GlyphBitmap::new(code, width, height, vec![255; (width * height) as usize]).unwrap()
}

/// A deterministic stand-in for a font.
///
/// Glyph sizes vary with the character code, the space has no outline and
/// coverage values differ per pixel and per glyph, so misplaced or
/// transposed copies show up as pixel mismatches.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SyntheticFont {
    /// Size of the largest glyph the font can produce.
    pub(crate) scale: u32,
}

impl SyntheticFont {
    pub(crate) fn new(scale: u32) -> Self {
        Self { scale }
    }

    fn dimensions(&self, code: char) -> (u32, u32) {
        let code = code as u32;
        let width = 1 + (code * 7) % self.scale;
        let height = 1 + (code * 5 + 3) % self.scale;
        (width, height)
    }
}

impl GlyphSource for SyntheticFont {
    type Error = String;

    fn rasterize(&mut self, code: char) -> Result<GlyphBitmap, String> {
        if code == ' ' {
            return Ok(GlyphBitmap::empty(code));
        }
        let (width, height) = self.dimensions(code);
        let coverage = (0..width * height)
            .map(|index| ((index * 13 + code as u32 * 31) % 255 + 1) as u8)
            .collect();
        let bearing = (code as i32 % 5) - 2;
        GlyphBitmap::new(code, width, height, coverage)
            .map(|bitmap| bitmap.with_bearing(bearing, height as i32))
            .map_err(|err| err.to_string())
    }
}

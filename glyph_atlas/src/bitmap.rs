// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph bitmaps and their placements within an atlas.

use alloc::vec::Vec;

use crate::Error;

/// An alpha-only glyph mask as produced by a font rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    code: char,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
    bearing_x: i32,
    bearing_y: i32,
}

impl GlyphBitmap {
    /// Creates a bitmap from row-major coverage values.
    ///
    /// Each coverage byte is an alpha value: 0 is transparent, 255 is opaque.
    /// Fails with [`ErrorKind::CoverageLength`](crate::ErrorKind::CoverageLength)
    /// when `coverage.len() != width * height`.
    pub fn new(code: char, width: u32, height: u32, coverage: Vec<u8>) -> Result<Self, Error> {
        let expected = (width as usize).saturating_mul(height as usize);
        if coverage.len() != expected {
            return Err(Error::coverage_length(code, coverage.len(), expected));
        }
        Ok(Self {
            code,
            width,
            height,
            coverage,
            bearing_x: 0,
            bearing_y: 0,
        })
    }

    /// Creates a bitmap with no pixels, e.g. for whitespace.
    pub fn empty(code: char) -> Self {
        Self {
            code,
            width: 0,
            height: 0,
            coverage: Vec::new(),
            bearing_x: 0,
            bearing_y: 0,
        }
    }

    /// Sets the horizontal and vertical bearings reported by the rasterizer.
    ///
    /// `bearing_x` is the offset from the pen origin to the left edge of the
    /// bitmap, `bearing_y` the offset from the baseline up to its top edge.
    #[must_use]
    pub fn with_bearing(mut self, bearing_x: i32, bearing_y: i32) -> Self {
        self.bearing_x = bearing_x;
        self.bearing_y = bearing_y;
        self
    }

    /// The character this bitmap was rasterized for.
    pub fn code(&self) -> char {
        self.code
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major alpha coverage, `width * height` bytes.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Horizontal bearing (pen origin to left edge).
    pub fn bearing_x(&self) -> i32 {
        self.bearing_x
    }

    /// Vertical bearing (baseline to top edge).
    pub fn bearing_y(&self) -> i32 {
        self.bearing_y
    }

    /// Whether the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The sub-rectangle assigned to one glyph within the atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left edge, in pixels from the atlas origin.
    pub x: u32,
    /// Top edge, in pixels from the atlas origin.
    pub y: u32,
    /// Width of the glyph bitmap.
    pub width: u32,
    /// Height of the glyph bitmap.
    pub height: u32,
}

impl Placement {
    /// One past the right edge, saturating at `u32::MAX`.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom edge, saturating at `u32::MAX`.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle lies entirely within a square atlas of `side` pixels.
    pub fn fits(&self, side: u32) -> bool {
        self.right() <= side && self.bottom() <= side
    }

    /// Whether two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The RGBA pixel buffer glyphs are blitted into.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::{Error, GlyphBitmap, Placement, Rgb};

/// Bytes per atlas pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Colour of every pixel no glyph is written to: transparent white.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 0];

/// A square, row-major RGBA8 image.
#[derive(Clone, PartialEq, Eq)]
pub struct AtlasBuffer {
    side: u32,
    pixels: Vec<u8>,
}

impl AtlasBuffer {
    /// Allocates a `side` by `side` buffer filled with [`BACKGROUND`].
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated. Use [`AtlasBuffer::try_new`]
    /// for sides that come from user input.
    pub fn new(side: u32) -> Self {
        match Self::try_new(side) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{err}"),
        }
    }

    /// Allocates a `side` by `side` buffer filled with [`BACKGROUND`].
    ///
    /// Fails with [`ErrorKind::AtlasTooLarge`](crate::ErrorKind::AtlasTooLarge)
    /// when the byte length overflows `usize` or the allocation fails.
    pub fn try_new(side: u32) -> Result<Self, Error> {
        let len = (side as usize)
            .checked_mul(side as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::atlas_too_large(side))?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::atlas_too_large(side))?;
        pixels.extend(BACKGROUND.iter().copied().cycle().take(len));
        Ok(Self { side, pixels })
    }

    /// Width and height in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// All pixels, row-major, four bytes each.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the buffer, returning its pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The RGBA bytes of the pixel at `(x, y)`, or `None` outside the atlas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let offset = self.offset(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// Copies a glyph's coverage into the atlas at `placement`.
    ///
    /// Every written pixel gets `fill` in its colour channels and the
    /// glyph's coverage as alpha. Pixels outside the placement are not
    /// touched, and empty bitmaps write nothing.
    ///
    /// # Panics
    ///
    /// Panics if the placement does not lie within the atlas or its size
    /// differs from the bitmap's. Both mean the placement did not come from
    /// a [`RowPacker`](crate::RowPacker) for this atlas.
    pub fn blit(&mut self, bitmap: &GlyphBitmap, placement: Placement, fill: Rgb) {
        assert!(
            placement.width == bitmap.width() && placement.height == bitmap.height(),
            "placement {placement:?} does not match the {}x{} bitmap of {:?}",
            bitmap.width(),
            bitmap.height(),
            bitmap.code()
        );
        assert!(
            placement.fits(self.side),
            "placement {placement:?} of {:?} leaves the {}x{} atlas",
            bitmap.code(),
            self.side,
            self.side
        );
        if bitmap.is_empty() {
            return;
        }

        let width = bitmap.width() as usize;
        // Bytes between the end of one glyph row and the start of the next.
        let row_skip = (self.side as usize - width) * BYTES_PER_PIXEL;
        let mut dst = self.offset(placement.x, placement.y);
        for row in bitmap.coverage().chunks_exact(width) {
            for &alpha in row {
                self.pixels[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&fill.with_alpha(alpha));
                dst += BYTES_PER_PIXEL;
            }
            dst += row_skip;
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.side as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl Debug for AtlasBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AtlasBuffer")
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}

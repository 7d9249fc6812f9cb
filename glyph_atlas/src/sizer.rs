// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the side length of a square atlas.

use crate::Error;

/// Smallest side the sizer tries by default.
pub const DEFAULT_MIN_SIDE: u32 = 128;

/// Largest side the sizer accepts by default.
///
/// Matches the texture size limit most GPUs guarantee.
pub const DEFAULT_MAX_SIDE: u32 = 16384;

/// Finds the smallest square atlas, on a doubling ladder, that can hold a
/// glyph set under the shelf policy of [`RowPacker`](crate::RowPacker).
///
/// Sizing is worst-case: every glyph is assumed to be as wide as the widest
/// glyph (one "cell") and every row as tall as the tallest glyph. A row of an
/// atlas with side `s` then holds at least `s / cell_width` glyphs, whatever
/// their actual widths, so the packer can never run off the bottom of an
/// atlas accepted here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasSizer {
    min_side: u32,
    max_side: u32,
}

impl AtlasSizer {
    /// Creates a sizer that starts at `min_side` and gives up past `max_side`.
    pub fn new(min_side: u32, max_side: u32) -> Result<Self, Error> {
        if min_side == 0 || min_side > max_side {
            return Err(Error::invalid_config(min_side, max_side));
        }
        Ok(Self { min_side, max_side })
    }

    /// The first side tried.
    pub fn min_side(&self) -> u32 {
        self.min_side
    }

    /// The largest side accepted.
    pub fn max_side(&self) -> u32 {
        self.max_side
    }

    /// Returns the smallest accepted side for `glyph_count` cells of
    /// `cell_width` by `cell_height` pixels.
    pub fn size(&self, cell_width: u32, cell_height: u32, glyph_count: usize) -> Result<u32, Error> {
        if glyph_count == 0 {
            return Err(Error::empty_glyph_set());
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(Error::zero_sized_glyphs(cell_width, cell_height));
        }

        let mut side = self.min_side;
        loop {
            if let Some(rows) = rows_needed(side, cell_width, glyph_count) {
                let height = u64::from(cell_height) * rows;
                log::trace!("atlas side {side}: {rows} rows, {height} pixels tall");
                if height <= u64::from(side) {
                    log::debug!(
                        "sized atlas to {side}x{side} for {glyph_count} cells of {cell_width}x{cell_height}"
                    );
                    return Ok(side);
                }
            } else {
                log::trace!("atlas side {side}: narrower than one cell");
            }

            side = match side.checked_mul(2) {
                Some(next) if next <= self.max_side => next,
                _ => {
                    return Err(Error::no_feasible_size(
                        glyph_count,
                        cell_width,
                        cell_height,
                        self.max_side,
                    ));
                }
            };
        }
    }
}

impl Default for AtlasSizer {
    fn default() -> Self {
        Self {
            min_side: DEFAULT_MIN_SIDE,
            max_side: DEFAULT_MAX_SIDE,
        }
    }
}

/// Rows a side of `side` pixels needs for `count` cells, or `None` if not
/// even one cell fits across.
fn rows_needed(side: u32, cell_width: u32, count: usize) -> Option<u64> {
    let per_row = u64::from(side / cell_width);
    if per_row == 0 {
        return None;
    }
    Some((count as u64).div_ceil(per_row))
}

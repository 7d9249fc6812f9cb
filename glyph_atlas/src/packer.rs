// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf packing of glyphs into fixed-height rows.

use crate::{Error, GlyphBitmap, Placement};

/// How far the cursor moves for each glyph, besides the bitmap itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Advance {
    /// Glyphs are placed directly after one another.
    #[default]
    Width,
    /// A glyph's positive left bearing is skipped before it is placed, so
    /// glyphs keep some of the spacing they have when set as text.
    Bearing,
}

impl Advance {
    /// Blank pixels left in front of `bitmap`.
    pub fn lead(self, bitmap: &GlyphBitmap) -> u32 {
        match self {
            Self::Width => 0,
            Self::Bearing => bitmap.bearing_x().max(0).unsigned_abs(),
        }
    }
}

/// The packer's write position.
///
/// Moves left to right along a row, then down by a whole row height on a
/// wrap. Neither coordinate ever decreases except `x`, which returns to zero
/// when a row wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackingCursor {
    /// Next free column of the current row.
    pub x: u32,
    /// Top edge of the current row.
    pub y: u32,
    /// Height reserved for every row.
    pub row_height: u32,
}

/// Greedy left-to-right, top-to-bottom shelf packer.
///
/// All rows share one height, normally the height of the tallest glyph in
/// the set, so space below shorter glyphs is never reused.
#[derive(Clone, Debug)]
pub struct RowPacker {
    side: u32,
    padding: u32,
    advance: Advance,
    cursor: PackingCursor,
}

impl RowPacker {
    /// Creates a packer for a square atlas of `side` pixels with rows of
    /// `row_height` pixels.
    pub fn new(side: u32, row_height: u32) -> Self {
        Self {
            side,
            padding: 0,
            advance: Advance::Width,
            cursor: PackingCursor {
                x: 0,
                y: 0,
                row_height,
            },
        }
    }

    /// Leaves `padding` blank pixels after each glyph in a row.
    ///
    /// Vertical spacing comes from the row height, which the caller chooses.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Selects the cursor advance policy.
    #[must_use]
    pub fn with_advance(mut self, advance: Advance) -> Self {
        self.advance = advance;
        self
    }

    /// Side length of the atlas being packed.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Current write position.
    pub fn cursor(&self) -> PackingCursor {
        self.cursor
    }

    /// Assigns the next glyph a place in the atlas.
    ///
    /// Must be called in ascending code order; the cursor only moves forward.
    pub fn place(&mut self, bitmap: &GlyphBitmap) -> Result<Placement, Error> {
        let lead = self.advance.lead(bitmap);
        let span = lead.saturating_add(bitmap.width());
        if span > self.side {
            return Err(Error::glyph_too_wide(bitmap.code(), span, self.side));
        }

        if self.cursor.x.saturating_add(span) > self.side {
            self.cursor.x = 0;
            self.cursor.y = self.cursor.y.saturating_add(self.cursor.row_height);
            log::trace!("row wrap before {:?}, next row at y={}", bitmap.code(), self.cursor.y);
        }

        let placement = Placement {
            x: self.cursor.x + lead,
            y: self.cursor.y,
            width: bitmap.width(),
            height: bitmap.height(),
        };
        let bottom = placement.y.saturating_add(placement.height);
        if bottom > self.side {
            return Err(Error::placement_out_of_bounds(bitmap.code(), bottom, self.side));
        }

        self.cursor.x = placement.right().saturating_add(self.padding);
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::{Advance, RowPacker};
    use crate::{ErrorKind, GlyphBitmap, Placement};
    use alloc::vec;

    fn square(code: char, size: u32) -> GlyphBitmap {
        GlyphBitmap::new(code, size, size, vec![255; (size * size) as usize]).unwrap()
    }

    fn at(x: u32, y: u32, width: u32, height: u32) -> Placement {
        Placement {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn packer_wraps_when_row_is_full() {
        let mut packer = RowPacker::new(32, 10);
        let placements: alloc::vec::Vec<_> = (' '..='#')
            .map(|code| packer.place(&square(code, 10)).unwrap())
            .collect();
        assert_eq!(
            placements,
            [
                at(0, 0, 10, 10),
                at(10, 0, 10, 10),
                at(20, 0, 10, 10),
                at(0, 10, 10, 10)
            ]
        );
        assert_eq!(packer.cursor().x, 10);
        assert_eq!(packer.cursor().y, 10);
    }

    #[test]
    fn packer_exact_fit_does_not_wrap() {
        let mut packer = RowPacker::new(20, 10);
        packer.place(&square('a', 10)).unwrap();
        assert_eq!(packer.place(&square('b', 10)), Ok(at(10, 0, 10, 10)));
        assert_eq!(packer.cursor().x, 20, "cursor sits on the right edge");
    }

    #[test]
    fn packer_empty_glyph_takes_no_space() {
        let mut packer = RowPacker::new(32, 10);
        assert_eq!(packer.place(&GlyphBitmap::empty(' ')), Ok(at(0, 0, 0, 0)));
        assert_eq!(packer.place(&square('!', 10)), Ok(at(0, 0, 10, 10)));
    }

    #[test]
    fn packer_padding_separates_glyphs() {
        let mut packer = RowPacker::new(32, 12).with_padding(2);
        assert_eq!(packer.place(&square('a', 10)), Ok(at(0, 0, 10, 10)));
        assert_eq!(packer.place(&square('b', 10)), Ok(at(12, 0, 10, 10)));
        // 24 + 10 > 32: wraps, rows are 12 apart.
        assert_eq!(packer.place(&square('c', 10)), Ok(at(0, 12, 10, 10)));
    }

    #[test]
    fn packer_bearing_advance_skips_left_bearing() {
        let mut packer = RowPacker::new(64, 10).with_advance(Advance::Bearing);
        let a = square('a', 10).with_bearing(3, 10);
        let b = square('b', 10).with_bearing(-2, 10);
        assert_eq!(packer.place(&a), Ok(at(3, 0, 10, 10)));
        // Negative bearings never move glyphs backwards.
        assert_eq!(packer.place(&b), Ok(at(13, 0, 10, 10)));
    }

    #[test]
    fn packer_bearing_counts_towards_wrap() {
        let mut packer = RowPacker::new(32, 10).with_advance(Advance::Bearing);
        packer.place(&square('a', 10)).unwrap();
        packer.place(&square('b', 10)).unwrap();
        // 20 + 4 + 10 > 32.
        let c = square('c', 10).with_bearing(4, 0);
        assert_eq!(packer.place(&c), Ok(at(4, 10, 10, 10)));
    }

    #[test]
    fn packer_rejects_glyph_wider_than_atlas() {
        let mut packer = RowPacker::new(32, 10);
        let err = packer.place(&square('W', 33)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GlyphTooWide);
        assert_eq!(err.code(), Some('W'));
        assert_eq!(packer.cursor().x, 0, "a rejected glyph leaves the cursor alone");
    }

    #[test]
    fn packer_reports_vertical_overflow() {
        let mut packer = RowPacker::new(20, 10);
        for code in ['a', 'b', 'c', 'd'] {
            packer.place(&square(code, 10)).unwrap();
        }
        let err = packer.place(&square('e', 10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlacementOutOfBounds);
        assert!(err.kind().is_contract_violation(), "overflow is a contract failure");
        assert_eq!((err.extent(), err.limit()), (30, 20));
    }
}

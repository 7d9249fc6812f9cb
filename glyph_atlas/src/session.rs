// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One packing pass, from a glyph set to a finished atlas.

use alloc::vec::Vec;

use crate::metadata::MetadataLine;
use crate::sizer::{DEFAULT_MAX_SIDE, DEFAULT_MIN_SIDE};
use crate::{Advance, AtlasBuffer, AtlasSizer, Error, GlyphBitmap, MetadataRecorder, Rgb, RowPacker};

/// Settings for a packing pass.
///
/// Everything a pass depends on lives here, so passes for different fonts
/// or sizes are independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackConfig {
    /// First side tried by the sizer.
    pub min_side: u32,
    /// Largest side the sizer accepts.
    pub max_side: u32,
    /// Use exactly this side instead of sizing the atlas.
    ///
    /// Must lie within `1..=max_side`.
    pub side: Option<u32>,
    /// Blank pixels after each glyph and below each row.
    pub padding: u32,
    /// Colour channels of every glyph pixel.
    pub fill: Rgb,
    /// Cursor advance policy.
    pub advance: Advance,
}

impl PackConfig {
    /// Sets the range of sides the sizer may choose from.
    #[must_use]
    pub fn with_side_range(mut self, min_side: u32, max_side: u32) -> Self {
        self.min_side = min_side;
        self.max_side = max_side;
        self
    }

    /// Skips sizing and packs into an atlas of exactly `side` pixels.
    #[must_use]
    pub fn with_side(mut self, side: u32) -> Self {
        self.side = Some(side);
        self
    }

    /// Sets the spacing between glyphs and between rows.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the glyph fill colour.
    #[must_use]
    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the cursor advance policy.
    #[must_use]
    pub fn with_advance(mut self, advance: Advance) -> Self {
        self.advance = advance;
        self
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            min_side: DEFAULT_MIN_SIDE,
            max_side: DEFAULT_MAX_SIDE,
            side: None,
            padding: 0,
            fill: Rgb::MAGENTA,
            advance: Advance::Width,
        }
    }
}

/// The worst-case footprint of a glyph set, gathered by the sizing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extents {
    /// Number of glyphs.
    pub count: usize,
    /// Widest bitmap.
    pub max_width: u32,
    /// Tallest bitmap.
    pub max_height: u32,
    /// Widest horizontal advance: lead, bitmap and padding.
    pub cell_width: u32,
    /// Row height: tallest bitmap plus padding.
    pub cell_height: u32,
}

impl Extents {
    /// Measures `glyphs` as they would be packed under `config`.
    pub fn measure(glyphs: &[GlyphBitmap], config: &PackConfig) -> Self {
        let mut extents = Self {
            count: glyphs.len(),
            ..Self::default()
        };
        for glyph in glyphs {
            let span = config
                .advance
                .lead(glyph)
                .saturating_add(glyph.width())
                .saturating_add(config.padding);
            extents.max_width = extents.max_width.max(glyph.width());
            extents.max_height = extents.max_height.max(glyph.height());
            extents.cell_width = extents.cell_width.max(span);
        }
        extents.cell_height = extents.max_height.saturating_add(config.padding);
        extents
    }
}

/// A finished atlas and the placement of every glyph in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedAtlas {
    buffer: AtlasBuffer,
    metadata: MetadataRecorder,
    row_height: u32,
}

impl PackedAtlas {
    /// Side length of the atlas in pixels.
    pub fn side(&self) -> u32 {
        self.buffer.side()
    }

    /// Height of every row.
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// The atlas pixels.
    pub fn buffer(&self) -> &AtlasBuffer {
        &self.buffer
    }

    /// One line per glyph, in ascending code order.
    pub fn lines(&self) -> &[MetadataLine] {
        self.metadata.lines()
    }

    /// The metadata file contents.
    pub fn metadata_text(&self) -> alloc::string::String {
        self.metadata.serialize()
    }

    /// Splits the atlas into its pixel buffer and metadata lines.
    pub fn into_parts(self) -> (AtlasBuffer, Vec<MetadataLine>) {
        (self.buffer, self.metadata.into_lines())
    }
}

/// Packs a glyph set into a new atlas.
///
/// `glyphs` must be in strictly ascending code order and must not contain
/// control characters. The whole set is validated and the atlas sized
/// before anything is written; the pass then places, blits and records one
/// glyph at a time. Any failure discards the partial atlas.
///
/// ```
/// use glyph_atlas::{pack, GlyphBitmap, PackConfig};
///
/// let glyphs: Vec<GlyphBitmap> = ('a'..='c')
///     .map(|code| GlyphBitmap::new(code, 4, 6, vec![255; 24]).unwrap())
///     .collect();
/// let atlas = pack(&glyphs, &PackConfig::default()).unwrap();
/// assert_eq!(atlas.side(), 128);
/// assert_eq!(atlas.metadata_text(), "a,0,0,4,6\nb,4,0,4,6\nc,8,0,4,6\n");
/// ```
pub fn pack(glyphs: &[GlyphBitmap], config: &PackConfig) -> Result<PackedAtlas, Error> {
    validate_codes(glyphs)?;
    let extents = Extents::measure(glyphs, config);
    log::debug!(
        "measured {} glyphs: widest {}, tallest {}, cell {}x{}",
        extents.count,
        extents.max_width,
        extents.max_height,
        extents.cell_width,
        extents.cell_height
    );

    // Padding alone gives empty glyphs a non-zero cell.
    if extents.max_width == 0 || extents.max_height == 0 {
        return Err(Error::zero_sized_glyphs(extents.max_width, extents.max_height));
    }

    let side = match config.side {
        Some(side) => {
            if side == 0 || side > config.max_side {
                return Err(Error::invalid_side(side, config.max_side));
            }
            side
        }
        None => AtlasSizer::new(config.min_side, config.max_side)?.size(
            extents.cell_width,
            extents.cell_height,
            extents.count,
        )?,
    };

    // Reject glyphs that cannot fit any row before a pixel is allocated.
    for glyph in glyphs {
        let span = config.advance.lead(glyph).saturating_add(glyph.width());
        if span > side {
            return Err(Error::glyph_too_wide(glyph.code(), span, side));
        }
    }

    let mut packer = RowPacker::new(side, extents.cell_height)
        .with_padding(config.padding)
        .with_advance(config.advance);
    let mut buffer = AtlasBuffer::try_new(side)?;
    let mut metadata = MetadataRecorder::with_capacity(glyphs.len());
    for glyph in glyphs {
        let placement = packer.place(glyph)?;
        log::trace!("{:?} at {placement:?}", glyph.code());
        buffer.blit(glyph, placement, config.fill);
        metadata.record(glyph.code(), placement);
    }

    let cursor = packer.cursor();
    log::debug!(
        "packed {} glyphs into {side}x{side}, last row at y={} of height {}",
        metadata.len(),
        cursor.y,
        cursor.row_height
    );
    Ok(PackedAtlas {
        buffer,
        metadata,
        row_height: extents.cell_height,
    })
}

fn validate_codes(glyphs: &[GlyphBitmap]) -> Result<(), Error> {
    if glyphs.is_empty() {
        return Err(Error::empty_glyph_set());
    }
    let mut previous: Option<char> = None;
    for glyph in glyphs {
        let code = glyph.code();
        if !MetadataLine::is_encodable(code) {
            return Err(Error::unencodable_code(code));
        }
        if let Some(previous) = previous.filter(|&previous| previous >= code) {
            return Err(Error::unordered_codes(code, previous));
        }
        previous = Some(code);
    }
    Ok(())
}

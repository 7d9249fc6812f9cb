// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization with Swash.

use anyhow::{anyhow, bail, Result};
use glyph_atlas::{GlyphBitmap, GlyphSource};
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{CacheKey, FontDataRef, FontRef};

/// Rasterizes characters of one font face at a fixed pixel size.
pub(crate) struct SwashSource {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
    size: f32,
    context: ScaleContext,
}

impl SwashSource {
    /// Loads face `index` of the font file contents in `data`.
    pub(crate) fn new(data: Vec<u8>, index: usize, size: f32) -> Result<Self> {
        let faces = FontDataRef::new(&data)
            .map(|font_data| font_data.len())
            .ok_or_else(|| anyhow!("not a TrueType or OpenType font"))?;
        if index >= faces {
            bail!("face index {index} requested, but the font file has {faces} face(s)");
        }
        let font = FontRef::from_index(&data, index)
            .ok_or_else(|| anyhow!("face {index} of the font file cannot be read"))?;
        let (offset, key) = (font.offset, font.key);
        log::debug!("loaded face {index} of {faces} at {size} px");
        Ok(Self {
            data,
            offset,
            key,
            size,
            context: ScaleContext::new(),
        })
    }
}

impl GlyphSource for SwashSource {
    type Error = anyhow::Error;

    fn rasterize(&mut self, code: char) -> Result<GlyphBitmap> {
        let font = FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        };
        let glyph_id = font.charmap().map(code);
        if glyph_id == 0 {
            log::warn!("font has no glyph for {code:?}, using the missing glyph");
        }

        let mut scaler = self
            .context
            .builder(font)
            .size(self.size)
            .hint(true)
            .build();
        let Some(image) = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)
        else {
            log::debug!("{code:?} has no outline");
            return Ok(GlyphBitmap::empty(code));
        };

        if !matches!(image.content, Content::Mask) {
            bail!("{code:?} did not render to an alpha mask");
        }
        let placement = image.placement;
        log::trace!(
            "{code:?}: {}x{} bearing ({}, {})",
            placement.width,
            placement.height,
            placement.left,
            placement.top
        );
        let bitmap = GlyphBitmap::new(code, placement.width, placement.height, image.data)?;
        Ok(bitmap.with_bearing(placement.left, placement.top))
    }
}

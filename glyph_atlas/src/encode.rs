// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG output for finished atlases.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::AtlasBuffer;

impl AtlasBuffer {
    /// Encodes the atlas as an 8-bit RGBA PNG.
    pub fn write_png<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(writer, self.side(), self.side());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(std::io::Error::other)?;
        writer
            .write_image_data(self.pixels())
            .map_err(std::io::Error::other)?;
        writer.finish().map_err(std::io::Error::other)
    }

    /// Encodes the atlas as a PNG file at `path`, creating parent directories.
    pub fn save_png(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_png(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AtlasBuffer, GlyphBitmap, Placement, Rgb};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn png_round_trips_pixels() {
        let mut buffer = AtlasBuffer::new(8);
        let bitmap = GlyphBitmap::new('a', 2, 2, vec![0, 64, 128, 255]).unwrap();
        let placement = Placement {
            x: 5,
            y: 1,
            width: 2,
            height: 2,
        };
        buffer.blit(&bitmap, placement, Rgb::MAGENTA);

        let mut encoded = Vec::new();
        buffer.write_png(&mut encoded).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(encoded));
        let mut reader = decoder.read_info().unwrap();
        let mut decoded = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut decoded).unwrap();
        assert_eq!((info.width, info.height), (8, 8));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&decoded[..info.buffer_size()], buffer.pixels());
    }
}

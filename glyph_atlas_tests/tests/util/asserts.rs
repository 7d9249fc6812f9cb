// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glyph_atlas::{BACKGROUND, GlyphBitmap, PackedAtlas, Rgb};

/// Checks the geometric guarantees every packed atlas must meet.
pub(crate) fn assert_atlas_consistent(atlas: &PackedAtlas, glyphs: &[GlyphBitmap]) {
    let side = atlas.side();
    let lines = atlas.lines();
    assert_eq!(lines.len(), glyphs.len(), "one metadata line per glyph");

    for (line, glyph) in lines.iter().zip(glyphs) {
        assert_eq!(line.code, glyph.code(), "metadata keeps glyph order");
        assert_eq!(
            (line.placement.width, line.placement.height),
            (glyph.width(), glyph.height()),
            "placement of {:?} has the bitmap's size",
            glyph.code()
        );
        assert!(
            line.placement.fits(side),
            "{:?} at {:?} leaves the {side}x{side} atlas",
            line.code,
            line.placement
        );
        assert!(
            line.placement.y + atlas.row_height() <= side,
            "row of {:?} at y={} does not fit below the atlas edge",
            line.code,
            line.placement.y
        );
    }

    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            assert!(
                !a.placement.overlaps(&b.placement),
                "{:?} at {:?} overlaps {:?} at {:?}",
                a.code,
                a.placement,
                b.code,
                b.placement
            );
        }
    }
}

/// Checks that every glyph's coverage landed at its placement and that no
/// other pixel was written.
pub(crate) fn assert_pixels_match(atlas: &PackedAtlas, glyphs: &[GlyphBitmap], fill: Rgb) {
    let side = atlas.side();
    let mut covered = vec![false; (side * side) as usize];

    for (line, glyph) in atlas.lines().iter().zip(glyphs) {
        let placement = line.placement;
        for row in 0..glyph.height() {
            for col in 0..glyph.width() {
                let (x, y) = (placement.x + col, placement.y + row);
                let alpha = glyph.coverage()[(row * glyph.width() + col) as usize];
                assert_eq!(
                    atlas.buffer().pixel(x, y),
                    Some(fill.with_alpha(alpha)),
                    "pixel ({col}, {row}) of {:?} at atlas ({x}, {y})",
                    glyph.code()
                );
                covered[(y * side + x) as usize] = true;
            }
        }
    }

    for y in 0..side {
        for x in 0..side {
            if !covered[(y * side + x) as usize] {
                assert_eq!(
                    atlas.buffer().pixel(x, y),
                    Some(BACKGROUND),
                    "pixel ({x}, {y}) outside every glyph was written"
                );
            }
        }
    }
}

// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric guarantees of sizing and row packing over varied glyph sets.

use crate::util::{SyntheticFont, assert_atlas_consistent, solid};
use glyph_atlas::{
    Advance, AtlasSizer, ErrorKind, Extents, PackConfig, RowPacker, pack, rasterize_range,
};

const RANGES: [(char, char); 4] = [('!', '!'), ('A', 'Z'), (' ', '~'), ('0', '9')];

fn configs() -> impl Iterator<Item = PackConfig> {
    [0, 1, 3].into_iter().flat_map(|padding| {
        [Advance::Width, Advance::Bearing].map(move |advance| {
            PackConfig::default()
                .with_padding(padding)
                .with_advance(advance)
        })
    })
}

#[test]
fn packing_holds_for_varied_sets() {
    for scale in [3, 11, 24, 40, 97] {
        for (first, last) in RANGES {
            let glyphs = rasterize_range(&mut SyntheticFont::new(scale), first..=last).unwrap();
            for config in configs() {
                let atlas = pack(&glyphs, &config).unwrap();
                assert_atlas_consistent(&atlas, &glyphs);
            }
        }
    }
}

#[test]
fn packing_side_is_smallest_on_ladder() {
    for scale in [5, 24, 60] {
        let glyphs = rasterize_range(&mut SyntheticFont::new(scale), ' '..='~').unwrap();
        for config in configs() {
            let extents = Extents::measure(&glyphs, &config);
            let atlas = pack(&glyphs, &config).unwrap();
            let side = atlas.side();
            assert!(side.is_power_of_two(), "default ladder starts at 128");
            if side > config.min_side {
                let smaller = AtlasSizer::new(config.min_side, side / 2).unwrap();
                assert_eq!(
                    smaller
                        .size(extents.cell_width, extents.cell_height, extents.count)
                        .unwrap_err()
                        .kind(),
                    ErrorKind::NoFeasibleSize,
                    "a {side} atlas was chosen although {} would do",
                    side / 2
                );
            }
        }
    }
}

#[test]
fn packing_row_height_is_tallest_glyph_plus_padding() {
    let glyphs = [solid('a', 5, 3), solid('b', 5, 17), solid('c', 5, 8)];
    let atlas = pack(&glyphs, &PackConfig::default().with_padding(2)).unwrap();
    assert_eq!(atlas.row_height(), 19);
}

#[test]
fn packing_rows_only_move_down() {
    let glyphs = rasterize_range(&mut SyntheticFont::new(30), '!'..='~').unwrap();
    let atlas = pack(&glyphs, &PackConfig::default()).unwrap();
    for pair in atlas.lines().windows(2) {
        let (a, b) = (pair[0].placement, pair[1].placement);
        if b.y == a.y {
            assert!(
                b.x >= a.right(),
                "{:?} placed left of {:?} in the same row",
                pair[1].code,
                pair[0].code
            );
        } else {
            assert_eq!(b.y, a.y + atlas.row_height(), "rows are never skipped");
            assert_eq!(b.x, 0, "wrapped rows start at the left edge");
        }
    }
}

#[test]
fn packing_bearing_leaves_room_before_glyph() {
    let glyphs = [
        solid('a', 10, 10).with_bearing(4, 10),
        solid('b', 10, 10).with_bearing(-3, 10),
        solid('c', 10, 10).with_bearing(2, 10),
    ];
    let atlas = pack(&glyphs, &PackConfig::default().with_advance(Advance::Bearing)).unwrap();
    let xs: Vec<_> = atlas.lines().iter().map(|line| line.placement.x).collect();
    assert_eq!(xs, [4, 14, 26]);
}

#[test]
fn packing_by_hand_matches_pack() {
    let glyphs = rasterize_range(&mut SyntheticFont::new(20), 'a'..='z').unwrap();
    let config = PackConfig::default().with_padding(1);
    let atlas = pack(&glyphs, &config).unwrap();

    let mut packer = RowPacker::new(atlas.side(), atlas.row_height()).with_padding(1);
    for (glyph, line) in glyphs.iter().zip(atlas.lines()) {
        assert_eq!(packer.place(glyph).unwrap(), line.placement);
    }
    assert!(
        packer.cursor().y + atlas.row_height() <= atlas.side(),
        "last row ends inside the atlas"
    );
}

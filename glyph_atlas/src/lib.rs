// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Atlas packs rasterized glyph bitmaps into one square RGBA texture
//! and describes where each glyph ended up.
//!
//! A pass over a glyph set works in two steps:
//!
//! 1. Sizing. [`Extents::measure`] finds the worst-case glyph footprint and
//!    [`AtlasSizer`] picks the smallest power-of-two-ladder side that can
//!    hold every glyph at that footprint.
//! 2. Packing. [`RowPacker`] places glyphs left to right in rows as tall as
//!    the tallest glyph, [`AtlasBuffer::blit`] copies each glyph's coverage
//!    into the atlas alpha channel, and [`MetadataRecorder`] notes the
//!    placement.
//!
//! [`pack`] runs both steps. Bitmaps come from any [`GlyphSource`].
//!
//! The pass is sequential: the packer cursor and the pixel buffer are
//! threaded through every glyph in turn. Passes share no state, so several
//! atlases can be packed in parallel by the caller.
//!
//! ## Features
//!
//! - `std` (enabled by default): Implement `std`-only conveniences. Currently
//!   only needed by `png`.
//! - `png`: Encode atlases as PNG images with [`AtlasBuffer::write_png`].
//!
//! ## Example
//!
//! ```
//! use glyph_atlas::{pack, GlyphBitmap, PackConfig};
//!
//! let glyphs: Vec<GlyphBitmap> = (' '..='#')
//!     .map(|code| GlyphBitmap::new(code, 10, 10, vec![255; 100]).unwrap())
//!     .collect();
//! let atlas = pack(&glyphs, &PackConfig::default().with_side(32)).unwrap();
//! assert_eq!(
//!     atlas.metadata_text(),
//!     " ,0,0,10,10\n!,10,0,10,10\n\",20,0,10,10\n#,0,10,10,10\n"
//! );
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitmap;
mod buffer;
mod color;
#[cfg(feature = "png")]
mod encode;
mod error;
pub mod metadata;
mod packer;
mod session;
mod sizer;
mod source;

pub use bitmap::{GlyphBitmap, Placement};
pub use buffer::{AtlasBuffer, BACKGROUND, BYTES_PER_PIXEL};
pub use color::{ParseRgbError, Rgb};
pub use error::{Error, ErrorKind};
pub use metadata::{MetadataLine, MetadataRecorder, ParseMetadataError, ParseMetadataErrorKind};
pub use packer::{Advance, PackingCursor, RowPacker};
pub use session::{pack, Extents, PackConfig, PackedAtlas};
pub use sizer::{AtlasSizer, DEFAULT_MAX_SIDE, DEFAULT_MIN_SIDE};
pub use source::{rasterize_range, GlyphSource};

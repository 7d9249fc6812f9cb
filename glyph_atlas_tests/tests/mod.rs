// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_atlas`.
//!
//! - The `util` module contains a synthetic glyph source and assertions shared by
//!   different test modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities only need to be
//!   compiled once.
//! - For test naming, put the "topic" of the test at the start of the name instead of
//!   the end. For example, `packing_no_overlap` is better than `no_overlap_when_packing`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod packing;
mod util;

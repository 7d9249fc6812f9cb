// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod source;

pub(crate) use asserts::{assert_atlas_consistent, assert_pixels_match};
pub(crate) use source::{SyntheticFont, solid};

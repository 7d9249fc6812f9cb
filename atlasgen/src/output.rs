// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the atlas image and its metadata are written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use glyph_atlas::PackedAtlas;

/// Extension of the metadata file written next to the image.
pub(crate) const METADATA_EXTENSION: &str = "amf";

/// The pair of files produced for one font at one size.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct OutputPaths {
    pub(crate) image: PathBuf,
    pub(crate) metadata: PathBuf,
}

impl OutputPaths {
    /// Derives `<stem>-<size>.png` and `<stem>-<size>.amf` from the font path.
    ///
    /// Files go to `out_dir` if given, otherwise next to the font.
    pub(crate) fn new(font: &Path, size: u32, out_dir: Option<&Path>) -> Result<Self> {
        let stem = font
            .file_stem()
            .ok_or_else(|| anyhow!("{} has no file name", font.display()))?;
        let dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => font
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        };

        // Not `with_extension`: stems may contain dots of their own.
        let file = |extension: &str| {
            let mut name = stem.to_os_string();
            name.push(format!("-{size}.{extension}"));
            dir.join(name)
        };
        Ok(Self {
            image: file("png"),
            metadata: file(METADATA_EXTENSION),
        })
    }

    /// Writes the atlas image and its metadata.
    pub(crate) fn write(&self, atlas: &PackedAtlas) -> Result<()> {
        atlas
            .buffer()
            .save_png(&self.image)
            .with_context(|| format!("failed to write {}", self.image.display()))?;
        fs::write(&self.metadata, atlas.metadata_text())
            .with_context(|| format!("failed to write {}", self.metadata.display()))?;
        Ok(())
    }
}

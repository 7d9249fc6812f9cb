// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `atlasgen` renders a range of characters from a font file into a square
//! PNG glyph atlas and writes the placement of every glyph to a metadata
//! file beside it.
//!
//! ```text
//! atlasgen fonts/Ubuntu-B.ttf --size 64
//! ```
//!
//! writes `fonts/Ubuntu-B-64.png` and `fonts/Ubuntu-B-64.amf`. Set
//! `RUST_LOG` (or pass `-v`) for more detail on sizing and packing.

mod output;
mod raster;

use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glyph_atlas::{pack, rasterize_range, Advance, PackConfig, Rgb};

use crate::output::OutputPaths;
use crate::raster::SwashSource;

/// Printable ASCII, the characters whose metadata lines are always well formed.
const PRINTABLE: RangeInclusive<char> = ' '..='~';

/// Render a font into a glyph atlas PNG and a placement metadata file.
#[derive(Debug, Parser)]
#[command(name = "atlasgen", version, about)]
struct Args {
    /// TrueType or OpenType font file.
    font: PathBuf,

    /// Font size in pixels per em.
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// First character to pack.
    #[arg(long, default_value_t = ' ')]
    first: char,

    /// Last character to pack.
    #[arg(long, default_value_t = '~')]
    last: char,

    /// Face to use from a font collection.
    #[arg(long, default_value_t = 0)]
    face_index: usize,

    /// Blank pixels between neighbouring glyphs and rows.
    #[arg(long, default_value_t = 0)]
    padding: u32,

    /// Glyph colour as six hex digits; coverage goes to the alpha channel.
    #[arg(long, default_value_t = Rgb::MAGENTA)]
    fill: Rgb,

    /// Keep each glyph's left bearing as blank space in front of it.
    #[arg(long)]
    bearing: bool,

    /// Use exactly this atlas side instead of the smallest one that fits.
    #[arg(long)]
    side: Option<u32>,

    /// Smallest atlas side to try.
    #[arg(long, default_value_t = glyph_atlas::DEFAULT_MIN_SIDE)]
    min_side: u32,

    /// Largest atlas side to accept.
    #[arg(long, default_value_t = glyph_atlas::DEFAULT_MAX_SIDE)]
    max_side: u32,

    /// Directory for the output files; defaults to the font's directory.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Log sizing and packing decisions.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// The characters to pack.
    fn codes(&self) -> Result<RangeInclusive<char>> {
        for code in [self.first, self.last] {
            if !PRINTABLE.contains(&code) {
                bail!(
                    "{code:?} is outside printable ASCII ({:?} to {:?})",
                    PRINTABLE.start(),
                    PRINTABLE.end()
                );
            }
        }
        if self.first > self.last {
            bail!("first character {:?} comes after last character {:?}", self.first, self.last);
        }
        Ok(self.first..=self.last)
    }

    fn pack_config(&self) -> PackConfig {
        let advance = if self.bearing {
            Advance::Bearing
        } else {
            Advance::Width
        };
        let config = PackConfig::default()
            .with_side_range(self.min_side, self.max_side)
            .with_padding(self.padding)
            .with_fill(self.fill)
            .with_advance(advance);
        match self.side {
            Some(side) => config.with_side(side),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let codes = args.codes()?;
    let outputs = OutputPaths::new(&args.font, args.size, args.out_dir.as_deref())?;

    let data =
        fs::read(&args.font).with_context(|| format!("failed to read {}", args.font.display()))?;
    let mut source = SwashSource::new(data, args.face_index, args.size as f32)
        .with_context(|| format!("failed to load {}", args.font.display()))?;
    let glyphs = rasterize_range(&mut source, codes)?;

    let atlas = pack(&glyphs, &args.pack_config()).context("failed to pack the glyph atlas")?;
    outputs.write(&atlas)?;

    log::info!(
        "packed {} glyphs into a {side}x{side} atlas: {} and {}",
        atlas.lines().len(),
        outputs.image.display(),
        outputs.metadata.display(),
        side = atlas.side()
    );
    Ok(())
}

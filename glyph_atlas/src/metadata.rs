// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line-oriented placement metadata written next to the atlas image.
//!
//! Each glyph gets one line, `<char>,<x>,<y>,<width>,<height>`, terminated by
//! a newline. Lines appear in ascending code order and there is no header.
//! The character is written as-is without escaping; since it is always
//! exactly one character, a comma in that position is still unambiguous, but
//! control characters (newline in particular) cannot be represented.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Placement;

/// The placement record of one glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MetadataLine {
    /// The glyph's character.
    pub code: char,
    /// Where the glyph sits in the atlas.
    pub placement: Placement,
}

impl MetadataLine {
    /// Whether `code` can be written to a metadata line without corrupting it.
    pub fn is_encodable(code: char) -> bool {
        !code.is_control()
    }
}

impl fmt::Display for MetadataLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.placement;
        write!(f, "{},{},{},{},{}", self.code, p.x, p.y, p.width, p.height)
    }
}

/// Collects metadata lines as glyphs are placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataRecorder {
    lines: Vec<MetadataLine>,
}

impl MetadataRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recorder with room for `capacity` glyphs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Appends the record for one glyph and returns it.
    pub fn record(&mut self, code: char, placement: Placement) -> MetadataLine {
        let line = MetadataLine { code, placement };
        self.lines.push(line);
        line
    }

    /// Recorded lines, in the order they were recorded.
    pub fn lines(&self) -> &[MetadataLine] {
        &self.lines
    }

    /// Number of recorded glyphs.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the recorder, returning its lines.
    pub fn into_lines(self) -> Vec<MetadataLine> {
        self.lines
    }

    /// Renders all recorded lines.
    pub fn serialize(&self) -> String {
        serialize(&self.lines)
    }
}

/// Renders metadata lines, each followed by a newline.
pub fn serialize(lines: &[MetadataLine]) -> String {
    let mut out = String::with_capacity(lines.len() * 16);
    for line in lines {
        // Writing into a `String` cannot fail.
        let _ = write_line(&mut out, line);
    }
    out
}

/// Writes metadata lines to any formatter sink.
pub fn write_lines<W: fmt::Write>(out: &mut W, lines: &[MetadataLine]) -> fmt::Result {
    lines.iter().try_for_each(|line| write_line(out, line))
}

fn write_line<W: fmt::Write>(out: &mut W, line: &MetadataLine) -> fmt::Result {
    writeln!(out, "{line}")
}

/// Reads metadata lines back.
///
/// Accepts `\n` or `\r\n` line endings; a missing newline after the last
/// line is tolerated. Empty input yields no lines.
///
/// ```
/// use glyph_atlas::metadata;
///
/// let lines = metadata::parse(",0,0,4,9\n-,4,0,5,2\n").unwrap();
/// assert_eq!(lines[0].code, ',');
/// assert_eq!(lines[1].placement.x, 4);
/// ```
pub fn parse(text: &str) -> Result<Vec<MetadataLine>, ParseMetadataError> {
    text.split_terminator('\n')
        .enumerate()
        .map(|(i, raw)| parse_line(raw.strip_suffix('\r').unwrap_or(raw), i + 1))
        .collect()
}

fn parse_line(raw: &str, line: usize) -> Result<MetadataLine, ParseMetadataError> {
    let err = |kind| ParseMetadataError { kind, line };

    let mut chars = raw.chars();
    let code = chars.next().ok_or(err(ParseMetadataErrorKind::MissingField))?;
    let rest = chars.as_str();
    let rest = rest
        .strip_prefix(',')
        .ok_or(err(ParseMetadataErrorKind::MissingField))?;

    let mut fields = rest.split(',');
    let mut next = || -> Result<u32, ParseMetadataError> {
        let field = fields
            .next()
            .ok_or(err(ParseMetadataErrorKind::MissingField))?;
        field
            .parse()
            .map_err(|_| err(ParseMetadataErrorKind::InvalidNumber))
    };
    let placement = Placement {
        x: next()?,
        y: next()?,
        width: next()?,
        height: next()?,
    };
    if fields.next().is_some() {
        return Err(err(ParseMetadataErrorKind::TrailingField));
    }
    Ok(MetadataLine { code, placement })
}

/// Error returned by [`parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseMetadataError {
    kind: ParseMetadataErrorKind,
    line: usize,
}

impl ParseMetadataError {
    /// What was wrong with the line.
    pub fn kind(&self) -> ParseMetadataErrorKind {
        self.kind
    }

    /// The 1-based number of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for ParseMetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseMetadataErrorKind::MissingField => "expected 5 comma separated fields",
            ParseMetadataErrorKind::InvalidNumber => "invalid number",
            ParseMetadataErrorKind::TrailingField => "more than 5 fields",
        };
        write!(f, "line {}: {what}", self.line)
    }
}

impl core::error::Error for ParseMetadataError {}

/// The non-exhaustive category of a [`ParseMetadataError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseMetadataErrorKind {
    /// The line ended before all five fields were read.
    MissingField,
    /// A coordinate or size is not an unsigned integer.
    InvalidNumber,
    /// The line has more than five fields.
    TrailingField,
}

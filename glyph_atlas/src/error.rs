// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a glyph set cannot be packed into an atlas.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the context needed to explain
/// the failure: the character code involved (if any), the extent that was
/// measured, and the limit it exceeded or failed to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The glyph the error is about, when it concerns a single glyph.
    code: Option<char>,

    /// The measured quantity that broke the limit (width, length, side...).
    extent: u32,

    /// The limit the measured quantity was checked against.
    limit: u32,

    /// The cell footprint the sizer gave up on.
    cells: Option<Cells>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cells {
    count: usize,
    width: u32,
    height: u32,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The character code of the offending glyph, if the error concerns one.
    pub fn code(&self) -> Option<char> {
        self.code
    }

    /// The measured quantity, in the unit of the error kind.
    ///
    /// For [`ErrorKind::CoverageLength`] this is the coverage length in bytes,
    /// for the size related kinds it is a pixel extent.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// The limit that [`Error::extent`] was checked against.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn empty_glyph_set() -> Self {
        Self::new(ErrorKind::EmptyGlyphSet, None, 0, 0)
    }

    pub(crate) fn zero_sized_glyphs(width: u32, height: u32) -> Self {
        Self::new(ErrorKind::ZeroSizedGlyphs, None, width, height)
    }

    pub(crate) fn coverage_length(code: char, len: usize, expected: usize) -> Self {
        Self::new(
            ErrorKind::CoverageLength,
            Some(code),
            saturate(len),
            saturate(expected),
        )
    }

    pub(crate) fn unordered_codes(code: char, previous: char) -> Self {
        Self::new(
            ErrorKind::UnorderedCodes,
            Some(code),
            code.into(),
            previous.into(),
        )
    }

    pub(crate) fn unencodable_code(code: char) -> Self {
        Self::new(ErrorKind::UnencodableCode, Some(code), code.into(), 0)
    }

    pub(crate) fn glyph_too_wide(code: char, width: u32, side: u32) -> Self {
        Self::new(ErrorKind::GlyphTooWide, Some(code), width, side)
    }

    pub(crate) fn no_feasible_size(
        count: usize,
        cell_width: u32,
        cell_height: u32,
        max_side: u32,
    ) -> Self {
        Self {
            cells: Some(Cells {
                count,
                width: cell_width,
                height: cell_height,
            }),
            ..Self::new(ErrorKind::NoFeasibleSize, None, cell_width, max_side)
        }
    }

    pub(crate) fn invalid_config(extent: u32, limit: u32) -> Self {
        Self::new(ErrorKind::InvalidConfig, None, extent, limit)
    }

    pub(crate) fn invalid_side(side: u32, max_side: u32) -> Self {
        Self::new(ErrorKind::InvalidSide, None, side, max_side)
    }

    pub(crate) fn atlas_too_large(side: u32) -> Self {
        Self::new(ErrorKind::AtlasTooLarge, None, side, 0)
    }

    pub(crate) fn placement_out_of_bounds(code: char, end: u32, side: u32) -> Self {
        Self::new(ErrorKind::PlacementOutOfBounds, Some(code), end, side)
    }

    fn new(kind: ErrorKind, code: Option<char>, extent: u32, limit: u32) -> Self {
        Self {
            kind,
            code,
            extent,
            limit,
            cells: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let code = CodeDisplay(self.code);
        match self.kind {
            ErrorKind::EmptyGlyphSet => write!(f, "glyph set is empty"),
            ErrorKind::ZeroSizedGlyphs => write!(
                f,
                "every glyph in the set is empty (widest {}, tallest {})",
                self.extent, self.limit
            ),
            ErrorKind::CoverageLength => write!(
                f,
                "glyph {code} has {} coverage bytes, expected {}",
                self.extent, self.limit
            ),
            ErrorKind::UnorderedCodes => write!(
                f,
                "glyph {code} does not follow U+{:04X} in ascending code order",
                self.limit
            ),
            ErrorKind::UnencodableCode => {
                write!(f, "glyph {code} cannot be written to the metadata format")
            }
            ErrorKind::GlyphTooWide => write!(
                f,
                "glyph {code} needs {} pixels of row width but the atlas side is {}",
                self.extent, self.limit
            ),
            ErrorKind::NoFeasibleSize => match self.cells {
                Some(cells) if cells.width <= self.limit => write!(
                    f,
                    "no atlas side up to {} can hold {} glyph cells of {}x{}",
                    self.limit, cells.count, cells.width, cells.height
                ),
                _ => write!(
                    f,
                    "glyph cells {} pixels wide do not fit across any atlas side up to {}",
                    self.extent, self.limit
                ),
            },
            ErrorKind::InvalidConfig => write!(
                f,
                "invalid atlas side range {}..={}: the minimum must be non-zero and at most the maximum",
                self.extent, self.limit
            ),
            ErrorKind::InvalidSide => write!(
                f,
                "atlas side {} is outside the accepted range 1..={}",
                self.extent, self.limit
            ),
            ErrorKind::AtlasTooLarge => write!(
                f,
                "a {0}x{0} atlas does not fit in memory",
                self.extent
            ),
            ErrorKind::PlacementOutOfBounds => write!(
                f,
                "placement of glyph {code} ends at {} outside the atlas side {}",
                self.extent, self.limit
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No glyphs were supplied.
    EmptyGlyphSet,

    /// Every glyph has zero width or zero height, so there is nothing to size against.
    ZeroSizedGlyphs,

    /// A bitmap's coverage length does not match `width * height`.
    CoverageLength,

    /// Glyph codes are not strictly ascending.
    UnorderedCodes,

    /// A code is a control character and would corrupt the metadata lines.
    UnencodableCode,

    /// A single glyph is wider than the atlas and can never be placed.
    GlyphTooWide,

    /// The side-length ladder passed its maximum without fitting the glyph set.
    NoFeasibleSize,

    /// The configured side range is empty or starts at zero.
    InvalidConfig,

    /// A forced atlas side is zero or larger than the configured maximum.
    InvalidSide,

    /// The atlas pixel buffer cannot be allocated.
    AtlasTooLarge,

    /// A computed placement would leave the atlas.
    ///
    /// This means the atlas side and the packer disagree; it never happens
    /// with a side chosen by [`AtlasSizer`](crate::AtlasSizer), only with a
    /// forced side that is too small.
    PlacementOutOfBounds,
}

impl ErrorKind {
    /// Whether this error is an internal-contract failure rather than bad input.
    pub fn is_contract_violation(self) -> bool {
        matches!(self, Self::PlacementOutOfBounds)
    }
}

struct CodeDisplay(Option<char>);

impl core::fmt::Display for CodeDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(code) if !code.is_control() => write!(f, "{code:?} (U+{:04X})", u32::from(code)),
            Some(code) => write!(f, "U+{:04X}", u32::from(code)),
            None => write!(f, "<unknown>"),
        }
    }
}

fn saturate(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

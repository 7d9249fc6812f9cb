// Copyright 2025 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// The colour written into the RGB channels of every glyph pixel.
///
/// Glyph coverage only ever ends up in the alpha channel; the fill is the
/// same for every pixel of every glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Magenta, the default fill. It stands out against the white background
    /// so the coverage mask is easy to inspect.
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    /// White, the usual choice when the atlas is tinted at draw time.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a six digit hex colour, with or without a leading `#`.
    ///
    /// ```
    /// use glyph_atlas::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#ff00ff"), Ok(Rgb::MAGENTA));
    /// assert_eq!(Rgb::parse("FFFFFF"), Ok(Rgb::WHITE));
    /// assert!(Rgb::parse("fff").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseRgbError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError { len: hex.len() });
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or(ParseRgbError { len: hex.len() })
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// The four bytes of an RGBA pixel with this fill and the given alpha.
    pub const fn with_alpha(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::MAGENTA
    }
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned by [`Rgb::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseRgbError {
    len: usize,
}

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 6 {
            write!(f, "colour contains a non-hex digit")
        } else {
            write!(f, "expected 6 hex digits, found {} characters", self.len)
        }
    }
}

impl core::error::Error for ParseRgbError {}

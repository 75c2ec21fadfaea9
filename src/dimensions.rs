//! Artwork dimension parsing and unit normalization.
//!
//! Parses free-text dimension fields like `"20 × 24 inches"` or
//! `"Oil on canvas, 50.8 x 61 cm"` into a [`ParsedDimensions`]. Hand-rolled
//! scanner, no regex, no allocations.
//!
//! # Example
//!
//! ```
//! use zenwall::{parse_dimensions, Unit};
//!
//! let d = parse_dimensions("50.8 x 61 cm").unwrap();
//! assert_eq!(d.unit, Unit::Centimeters);
//!
//! let inches = d.to_inches();
//! assert!((inches.width - 20.0).abs() < 1e-9);
//!
//! assert!(parse_dimensions("framed").is_none());
//! ```

use core::fmt;
use core::str::FromStr;

use whereat::{At, at};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Measurement unit of a dimension string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// `in`, `inch`, `inches`.
    Inches,
    /// `cm`.
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeters,
}

impl Unit {
    /// Canonical name: `"inches"` or `"cm"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Centimeters => "cm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width × height as written on the artwork record, in its own unit.
///
/// Both axes are always finite and positive when produced by the parser.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

/// Width × height in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InchSize {
    pub width: f64,
    pub height: f64,
}

impl ParsedDimensions {
    /// Normalize to inches. Centimeters are divided by [`CM_PER_INCH`];
    /// inches pass through untouched.
    pub fn to_inches(&self) -> InchSize {
        match self.unit {
            Unit::Inches => InchSize {
                width: self.width,
                height: self.height,
            },
            Unit::Centimeters => InchSize {
                width: self.width / CM_PER_INCH,
                height: self.height / CM_PER_INCH,
            },
        }
    }
}

/// Why a dimension string was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DimensionError {
    /// Input was empty or whitespace only.
    Empty,
    /// No `<number> x <number>` pair anywhere in the input.
    NoMatch,
    /// A `<number> x <number>` pair was found but no recognized unit follows it.
    MissingUnit,
    /// A numeric token did not fit in a finite `f64`.
    InvalidNumber,
    /// Width or height is zero or negative.
    NonPositive,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "dimension text is empty",
            Self::NoMatch => "no `<width> x <height>` pair found",
            Self::MissingUnit => "expected a unit (in, inch, inches, cm) after the dimensions",
            Self::InvalidNumber => "dimension is not a finite number",
            Self::NonPositive => "dimensions must be greater than zero",
        })
    }
}

impl core::error::Error for DimensionError {}

impl FromStr for ParsedDimensions {
    type Err = At<DimensionError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(at(DimensionError::Empty));
        }

        let mut saw_pair = false;
        let mut start = 0;
        while let Some(offset) = s[start..].find(|c: char| c.is_ascii_digit()) {
            let pos = start + offset;
            if starts_number(s, pos) {
                match match_at(s, pos) {
                    Match::Full(raw) => return raw.validate().map_err(at),
                    Match::PairOnly => saw_pair = true,
                    Match::None => {}
                }
            }
            start = pos + 1;
        }

        Err(at(if saw_pair {
            DimensionError::MissingUnit
        } else {
            DimensionError::NoMatch
        }))
    }
}

/// Parse a free-text dimension string. Returns `None` for anything that
/// doesn't describe a positive width, height and unit.
pub fn parse_dimensions(text: &str) -> Option<ParsedDimensions> {
    match text.parse::<ParsedDimensions>() {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::trace!(text, reason = %e.error(), "dimension text rejected");
            None
        }
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Numbers only start where the previous char is not part of a number,
/// so `"2.5.3"` never yields a match starting mid-token.
fn starts_number(s: &str, pos: usize) -> bool {
    match s[..pos].chars().next_back() {
        Some(c) => !(c.is_ascii_digit() || c == '.'),
        None => true,
    }
}

enum Match<'a> {
    Full(RawDimensions<'a>),
    PairOnly,
    None,
}

struct RawDimensions<'a> {
    width: &'a str,
    height: &'a str,
    negative: bool,
    unit: Unit,
}

impl RawDimensions<'_> {
    fn validate(&self) -> Result<ParsedDimensions, DimensionError> {
        let width = parse_number(self.width)?;
        let height = parse_number(self.height)?;
        if self.negative || width <= 0.0 || height <= 0.0 {
            return Err(DimensionError::NonPositive);
        }
        Ok(ParsedDimensions {
            width,
            height,
            unit: self.unit,
        })
    }
}

fn parse_number(token: &str) -> Result<f64, DimensionError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(DimensionError::InvalidNumber)
}

fn match_at(s: &str, pos: usize) -> Match<'_> {
    let mut sc = Scanner { s, pos };
    let negative = s[..pos].ends_with('-');

    let Some(width) = sc.number() else {
        return Match::None;
    };
    sc.skip_ws();
    if !sc.separator() {
        return Match::None;
    }
    sc.skip_ws();
    let Some(height) = sc.number() else {
        return Match::None;
    };
    sc.skip_ws();
    match sc.unit() {
        Some(unit) => Match::Full(RawDimensions {
            width,
            height,
            negative,
            unit,
        }),
        None => Match::PairOnly,
    }
}

struct Scanner<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn digits(&mut self) -> usize {
        let n = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.pos += n;
        n
    }

    /// `\d+(\.\d+)?`
    fn number(&mut self) -> Option<&'a str> {
        let begin = self.pos;
        if self.digits() == 0 {
            return None;
        }
        if self.rest().starts_with('.') {
            let dot = self.pos;
            self.pos += 1;
            if self.digits() == 0 {
                // Trailing dot ("20. x 24") is not part of the number.
                self.pos = dot;
            }
        }
        Some(&self.s[begin..self.pos])
    }

    /// `x`, `X` or `×`.
    fn separator(&mut self) -> bool {
        match self.rest().chars().next() {
            Some(c @ ('x' | 'X' | '×')) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Longest unit word first; the word must not run into more letters.
    fn unit(&mut self) -> Option<Unit> {
        const UNITS: [(&str, Unit); 4] = [
            ("inches", Unit::Inches),
            ("inch", Unit::Inches),
            ("in", Unit::Inches),
            ("cm", Unit::Centimeters),
        ];
        let rest = self.rest();
        for (word, unit) in UNITS {
            let Some(head) = rest.get(..word.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(word) {
                continue;
            }
            let boundary = rest[word.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphabetic());
            if boundary {
                self.pos += word.len();
                return Some(unit);
            }
        }
        None
    }
}

//! Typed CSS property values.
//!
//! A declaration value is one of three closed variants: opaque text (keywords and anything
//! the upstream parser did not type), a numeric length with a unit, or an 8-bit RGBA colour.
//! Every variant is plainly cloneable and prints itself through `Display`.

use core::fmt;
use core::str::FromStr;

use anyhow::{Error, Result, anyhow, bail};
use csscolorparser::parse as parse_css_color;
use log::error;
use serde::{Deserialize, Serialize};

/// Printable suffixes for [`Unit`], indexed by the unit's ordinal.
///
/// The order is a stable contract with upstream parsers that hand units over by index.
pub const UNIT_SUFFIXES: [&str; 6] = ["px", "em", "rem", "vw", "vh", "%"];

/// Length units understood by the value model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Absolute pixels.
    Px = 0,
    /// Relative to the element font size.
    Em = 1,
    /// Relative to the root font size.
    Rem = 2,
    /// Percent of the viewport width.
    Vw = 3,
    /// Percent of the viewport height.
    Vh = 4,
    /// Percent of the containing value.
    Percent = 5,
}

impl Unit {
    /// Every unit, in suffix-table order.
    pub const ALL: [Self; 6] = [
        Self::Px,
        Self::Em,
        Self::Rem,
        Self::Vw,
        Self::Vh,
        Self::Percent,
    ];

    /// Convert an upstream unit ordinal into a `Unit`.
    ///
    /// # Errors
    /// Returns an error if `index` is outside the suffix table. This is a contract violation by
    /// the caller and is never mapped to a fallback unit.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            error!(target: "css", "unit ordinal {index} is outside 0..{}", UNIT_SUFFIXES.len());
            anyhow!("unit ordinal {index} out of range")
        })
    }

    /// Ordinal of this unit within [`UNIT_SUFFIXES`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical printed suffix, e.g. `px` or `%`.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        UNIT_SUFFIXES[self.index()]
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(suffix: &str) -> Result<Self> {
        let lowered = suffix.trim().to_ascii_lowercase();
        let Some(index) = UNIT_SUFFIXES.iter().position(|known| *known == lowered) else {
            bail!("unknown unit suffix `{suffix}`");
        };
        Self::from_index(index)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.suffix())
    }
}

/// Straight (non-premultiplied) 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Fill colour of a freshly created canvas.
    pub const TRANSPARENT_WHITE: Self = Self::new(255, 255, 255, 0);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Channels in R, G, B, A order.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Convert a CSS colour token (`red`, `#e5e5e5`, `rgb(0, 32, 0)`, ...) into channels.
    ///
    /// # Errors
    /// Returns an error if the token is not a colour `csscolorparser` understands.
    pub fn parse(token: &str) -> Result<Self> {
        let color = parse_css_color(token.trim())
            .map_err(|err| anyhow!("invalid colour `{token}`: {err}"))?;
        Ok(Self::from(color.to_rgba8()))
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(channels: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = channels;
        Self::new(red, green, blue, alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// A magnitude paired with a unit, e.g. `15px`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub magnitude: f64,
    pub unit: Unit,
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}{}",
            format_magnitude(self.magnitude),
            self.unit
        )
    }
}

/// A CSS declaration value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Keyword or otherwise untyped text, printed verbatim.
    Text(String),
    /// Numeric length.
    Length(Length),
    /// RGBA colour.
    Color(Rgba),
}

impl Value {
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[inline]
    pub const fn length(magnitude: f64, unit: Unit) -> Self {
        Self::Length(Length { magnitude, unit })
    }

    #[inline]
    pub const fn color(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::Color(Rgba::new(red, green, blue, alpha))
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Length(_) | Self::Color(_) => None,
        }
    }

    #[inline]
    pub const fn as_length(&self) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            Self::Text(_) | Self::Color(_) => None,
        }
    }

    #[inline]
    pub const fn as_color(&self) -> Option<Rgba> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Text(_) | Self::Length(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Length(length) => fmt::Display::fmt(length, formatter),
            Self::Color(color) => fmt::Display::fmt(color, formatter),
        }
    }
}

/// Six fixed decimals, then trailing zeros and a dangling decimal point are dropped.
/// Integral magnitudes keep their integer digits (`100` stays `100`).
fn format_magnitude(magnitude: f64) -> String {
    let mut out = format!("{magnitude:.6}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0');
        let kept = trimmed.strip_suffix('.').unwrap_or(trimmed).len();
        out.truncate(kept);
    }
    out
}

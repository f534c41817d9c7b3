//! HSL color literals and hex conversion
//!
//! The palette stores colors as `hsl(h, s%, l%)` literal strings. This module
//! parses those literals and converts them to `#rrggbb` hex through the
//! standard piecewise-linear HSL basis function. Conversion is pure and
//! deterministic; all arithmetic is done in `f64` so channel rounding is
//! stable across platforms.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::HslParseError;

/// An HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees. Values at or above 360 wrap during conversion.
    pub h: f64,
    /// Saturation percentage in `[0, 100]`.
    pub s: f64,
    /// Lightness percentage in `[0, 100]`.
    pub l: f64,
}

/// An 8-bit RGB triple derived from an [`Hsl`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hsl_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^hsl\((\d+),\s*(\d+(?:\.\d+)?)%,\s*(\d+(?:\.\d+)?)%\)$")
            .expect("Invalid hsl literal pattern")
    })
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse an `hsl(h, s%, l%)` literal.
    ///
    /// The hue is an unsigned integer; saturation and lightness accept a
    /// decimal fraction (the palette uses up to one decimal, e.g. `99.7%`).
    /// Anything else, including `rgb(...)` literals and percent-less
    /// components, is an [`HslParseError`].
    pub fn parse(literal: &str) -> Result<Self, HslParseError> {
        let captures = hsl_pattern()
            .captures(literal.trim())
            .ok_or_else(|| HslParseError {
                literal: literal.to_string(),
            })?;

        // The pattern only admits unsigned decimal digits, so the component
        // parses cannot fail.
        let component = |i: usize| captures[i].parse::<f64>().unwrap_or_default();
        Ok(Self {
            h: component(1),
            s: component(2),
            l: component(3),
        })
    }

    /// True when saturation is zero, i.e. the color is a shade of gray.
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }

    /// Convert to 8-bit RGB.
    ///
    /// Hues outside `[0, 360)` wrap, since the basis function folds its
    /// argument into `[0, 1)` before sampling the sector ramp.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let (r, g, b) = if s == 0.0 {
            // achromatic
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }

    /// Convert to the canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    /// Writes the literal form, with integer percentages printed without a
    /// fraction and fractional ones with a single decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, ", self.h as u32)?;
        write_percent(f, self.s)?;
        f.write_str(", ")?;
        write_percent(f, self.l)?;
        f.write_str(")")
    }
}

fn write_percent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{}%", value as u32)
    } else {
        write!(f, "{value:.1}%")
    }
}

impl Rgb {
    /// Format as lowercase `#rrggbb`, each channel zero-padded to two digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The six-piecewise-linear HSL basis function.
///
/// `t` is folded into `[0, 1)`; sector boundaries sit at 1/6, 1/2 and 2/3.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

/// Parse an `hsl(...)` literal and convert it straight to hex.
pub fn hsl_to_hex(literal: &str) -> Result<String, HslParseError> {
    Ok(Hsl::parse(literal)?.to_hex())
}

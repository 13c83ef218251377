//! The canonical color value.
//!
//! Every input path — strings, structured channel triples, an existing
//! value — resolves to one [`Color`]: byte-range RGB channels stored as
//! floats, an alpha in `[0, 1]`, and presentation metadata (source
//! format, gradient flag, validity). Channels stay floating point so
//! chained operations keep sub-integer precision; they are clamped on
//! every write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::convert;
use crate::format::ColorFormat;
use crate::parse::{self, ColorInput};

/// Rounded byte-range RGB channels plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Hue in degrees `[0, 360)`, saturation and lightness as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// Hue in degrees `[0, 360)`, saturation and value as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Construction options: a preferred rendering format and the vendor
/// gradient flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Overrides the detected source format for default rendering.
    pub format: Option<ColorFormat>,
    /// Emit the `GradientType = 1,` clause in the filter string.
    pub gradient_type: bool,
}

/// A parsed color: byte-range RGB channels, alpha, and presentation
/// metadata.
///
/// Construction never fails; unrecognized input yields a value with
/// [`is_valid`](Color::is_valid) `false` and best-effort channels
/// (black, opaque) so formatting stays total. Derived operations return
/// new values; only the channel setters mutate in place.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    rounded_a: f64,
    format: Option<ColorFormat>,
    gradient_type: bool,
    valid: bool,
}

impl Color {
    /// Build a color from any accepted input shape.
    ///
    /// An existing [`Color`] passes through unchanged.
    pub fn new(input: impl Into<ColorInput>) -> Self {
        Self::with_options(input, Options::default())
    }

    /// Build a color with explicit presentation options.
    ///
    /// Options are ignored when the input is already a [`Color`].
    pub fn with_options(input: impl Into<ColorInput>, options: Options) -> Self {
        match input.into() {
            ColorInput::Existing(color) => color,
            other => {
                let resolved = parse::resolve(&other);
                Self {
                    r: resolved.r.clamp(0.0, 255.0),
                    g: resolved.g.clamp(0.0, 255.0),
                    b: resolved.b.clamp(0.0, 255.0),
                    a: resolved.a,
                    rounded_a: round_alpha(resolved.a),
                    format: options.format.or(resolved.format),
                    gradient_type: options.gradient_type,
                    valid: resolved.valid,
                }
            }
        }
    }

    /// Parse a color from text. Total: unparseable input yields an
    /// invalid black value, never an error.
    pub fn parse(text: &str) -> Self {
        Self::new(text)
    }

    /// Red channel, `[0, 255]`, unrounded.
    pub fn red(&self) -> f64 {
        self.r
    }

    /// Green channel, `[0, 255]`, unrounded.
    pub fn green(&self) -> f64 {
        self.g
    }

    /// Blue channel, `[0, 255]`, unrounded.
    pub fn blue(&self) -> f64 {
        self.b
    }

    /// Alpha, `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Alpha rounded to two decimal places, as used in string output.
    pub fn rounded_alpha(&self) -> f64 {
        self.rounded_a
    }

    /// The format the input was originally expressed in, when detected.
    pub fn source_format(&self) -> Option<ColorFormat> {
        self.format
    }

    /// Whether the filter string carries the `GradientType = 1,` clause.
    pub fn gradient_type(&self) -> bool {
        self.gradient_type
    }

    /// False when no recognized input shape matched during parsing.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Set the red channel, clamped to byte range. NaN is ignored.
    pub fn set_red(&mut self, value: f64) {
        self.r = clamp_channel(value, self.r);
    }

    /// Set the green channel, clamped to byte range. NaN is ignored.
    pub fn set_green(&mut self, value: f64) {
        self.g = clamp_channel(value, self.g);
    }

    /// Set the blue channel, clamped to byte range. NaN is ignored.
    pub fn set_blue(&mut self, value: f64) {
        self.b = clamp_channel(value, self.b);
    }

    /// Set alpha; NaN or out-of-range input collapses to `1`.
    pub fn set_alpha(&mut self, value: f64) {
        self.a = bounds::normalize_alpha(value);
        self.rounded_a = round_alpha(self.a);
    }

    /// Rounded byte channels plus alpha.
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: self.r.round() as u8,
            g: self.g.round() as u8,
            b: self.b.round() as u8,
            a: self.a,
        }
    }

    /// HSL with hue in degrees.
    pub fn to_hsla(&self) -> Hsla {
        let [h, s, l] = convert::rgb_to_hsl(self.r, self.g, self.b);
        Hsla { h: h * 360.0, s, l, a: self.a }
    }

    /// HSV with hue in degrees.
    pub fn to_hsva(&self) -> Hsva {
        let [h, s, v] = convert::rgb_to_hsv(self.r, self.g, self.b);
        Hsva { h: h * 360.0, s, v, a: self.a }
    }

    /// Perceptual luma `(r·299 + g·587 + b·114) / 1000` over rounded
    /// channels. Not true luminance; the classic W3C brightness formula.
    pub fn brightness(&self) -> f64 {
        let rgba = self.to_rgba();
        (f64::from(rgba.r) * 299.0 + f64::from(rgba.g) * 587.0 + f64::from(rgba.b) * 114.0)
            / 1000.0
    }

    /// Brightness below 128.
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// Brightness at or above 128.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }
}

fn round_alpha(a: f64) -> f64 {
    (a * 100.0).round() / 100.0
}

fn clamp_channel(value: f64, current: f64) -> f64 {
    if value.is_nan() { current } else { value.clamp(0.0, 255.0) }
}

/// Channel equality only; source format, gradient flag and validity are
/// presentation metadata.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }
}

/// Error for the fallible text-parsing boundary (`FromStr`, serde).
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized color input: {input:?}")]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Like [`Color::parse`] but fallible: errors exactly when the total
    /// constructor would mark the value invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = Self::parse(s);
        if color.is_valid() {
            Ok(color)
        } else {
            Err(ParseColorError::new(s))
        }
    }
}

/// Serializes as the default string rendering.
impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes by parsing; invalid input is a deserialization error.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default_rendering())
    }
}

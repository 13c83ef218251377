//! Textual renderings of a [`Color`].
//!
//! Each notation has a named method; [`Color::to_string_as`] dispatches
//! on an explicit [`ColorFormat`], and the `Display` impl picks a
//! default from the detected source format. The tuple notations emit the
//! alpha-less form only when alpha is exactly `1`; otherwise they append
//! the rounded alpha.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ParseColorError};
use crate::convert;
use crate::names;

/// The textual notations a color can be expressed in.
///
/// Doubles as the source-format tag recorded during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    Rgb,
    /// Percentage RGB, `rgb(r%, g%, b%)`.
    Prgb,
    /// 6-digit hex, `#rrggbb`.
    Hex,
    /// 3-digit hex, `#rgb`.
    Hex3,
    /// 8-digit hex with leading alpha byte, `#aarrggbb`.
    Hex8,
    /// `hsl(h, s%, l%)` / `hsla(...)`.
    Hsl,
    /// `hsv(h, s%, v%)` / `hsva(...)`.
    Hsv,
    /// CSS keyword.
    Name,
}

impl ColorFormat {
    /// The notation name as used in serialized form and `toString`-style
    /// dispatch.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Prgb => "prgb",
            Self::Hex => "hex",
            Self::Hex3 => "hex3",
            Self::Hex8 => "hex8",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(Self::Rgb),
            "prgb" => Ok(Self::Prgb),
            "hex" | "hex6" => Ok(Self::Hex),
            "hex3" => Ok(Self::Hex3),
            "hex8" => Ok(Self::Hex8),
            "hsl" => Ok(Self::Hsl),
            "hsv" => Ok(Self::Hsv),
            "name" => Ok(Self::Name),
            other => Err(ParseColorError::new(other)),
        }
    }
}

impl Color {
    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when alpha is not `1`.
    pub fn to_rgb_string(&self) -> String {
        let rgba = self.to_rgba();
        if self.alpha() == 1.0 {
            format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
        } else {
            format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, self.rounded_alpha())
        }
    }

    /// Percentage form, `rgb(r%, g%, b%)`, alpha-suffixed when not `1`.
    pub fn to_percentage_rgb_string(&self) -> String {
        let pct = |channel: f64| (channel / 255.0 * 100.0).round();
        let (r, g, b) = (pct(self.red()), pct(self.green()), pct(self.blue()));
        if self.alpha() == 1.0 {
            format!("rgb({r}%, {g}%, {b}%)")
        } else {
            format!("rgba({r}%, {g}%, {b}%, {})", self.rounded_alpha())
        }
    }

    /// `hsl(h, s%, l%)`, alpha-suffixed when not `1`.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_hsla();
        let (h, s, l) = (hsl.h.round(), (hsl.s * 100.0).round(), (hsl.l * 100.0).round());
        if self.alpha() == 1.0 {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            format!("hsla({h}, {s}%, {l}%, {})", self.rounded_alpha())
        }
    }

    /// `hsv(h, s%, v%)`, alpha-suffixed when not `1`.
    pub fn to_hsv_string(&self) -> String {
        let hsv = self.to_hsva();
        let (h, s, v) = (hsv.h.round(), (hsv.s * 100.0).round(), (hsv.v * 100.0).round());
        if self.alpha() == 1.0 {
            format!("hsv({h}, {s}%, {v}%)")
        } else {
            format!("hsva({h}, {s}%, {v}%, {})", self.rounded_alpha())
        }
    }

    /// Bare hex digits, no `#`. With `allow_3`, collapses when possible.
    pub fn to_hex(&self, allow_3: bool) -> String {
        convert::rgb_to_hex(self.red(), self.green(), self.blue(), allow_3)
    }

    /// `#rrggbb`, or the 3-digit form when `allow_3` and collapsible.
    pub fn to_hex_string(&self, allow_3: bool) -> String {
        format!("#{}", self.to_hex(allow_3))
    }

    /// Bare 8 hex digits, alpha byte first.
    pub fn to_hex8(&self) -> String {
        convert::rgba_to_hex(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// `#aarrggbb`.
    pub fn to_hex8_string(&self) -> String {
        format!("#{}", self.to_hex8())
    }

    /// The CSS keyword for this color, if it has one.
    ///
    /// Fully transparent values are `"transparent"`; translucent values
    /// have no keyword; otherwise the flipped name table decides.
    pub fn to_name(&self) -> Option<&'static str> {
        if self.alpha() == 0.0 {
            return Some("transparent");
        }
        if self.alpha() < 1.0 {
            return None;
        }
        names::name_for(&self.to_hex(false))
    }

    /// The legacy DXImageTransform two-color gradient descriptor.
    ///
    /// `second` defaults to `self`; the `GradientType = 1,` clause is
    /// present only when the gradient flag was set at construction.
    pub fn to_filter_string(&self, second: Option<&Color>) -> String {
        let start = self.to_hex8_string();
        let end = second.unwrap_or(self).to_hex8_string();
        let gradient = if self.gradient_type() { "GradientType = 1, " } else { "" };
        format!(
            "progid:DXImageTransform.Microsoft.gradient({gradient}startColorstr={start},endColorstr={end})"
        )
    }

    /// Render in an explicitly requested notation.
    ///
    /// A color with no keyword falls back to the 6-digit hex string.
    pub fn to_string_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Rgb => self.to_rgb_string(),
            ColorFormat::Prgb => self.to_percentage_rgb_string(),
            ColorFormat::Hex => self.to_hex_string(false),
            ColorFormat::Hex3 => self.to_hex_string(true),
            ColorFormat::Hex8 => self.to_hex8_string(),
            ColorFormat::Hsl => self.to_hsl_string(),
            ColorFormat::Hsv => self.to_hsv_string(),
            ColorFormat::Name => self
                .to_name()
                .map(str::to_string)
                .unwrap_or_else(|| self.to_hex_string(false)),
        }
    }

    /// The `Display` rendering: the source format, falling back to hex.
    ///
    /// Fully transparent values render as the `transparent` keyword, and
    /// translucent values whose source notation cannot carry alpha
    /// (hex6, hex3, keyword) fall back to the rgba string.
    pub(crate) fn default_rendering(&self) -> String {
        if self.alpha() == 0.0 {
            return "transparent".to_string();
        }
        let format = self.source_format().unwrap_or(ColorFormat::Hex);
        if self.alpha() < 1.0
            && matches!(format, ColorFormat::Hex | ColorFormat::Hex3 | ColorFormat::Name)
        {
            return self.to_rgb_string();
        }
        self.to_string_as(format)
    }
}

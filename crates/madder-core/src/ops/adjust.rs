//! Single-channel adjusters: lightness, saturation, RGB brightness and
//! hue rotation.
//!
//! Each adjuster lifts the color into HSL (or works on RGB directly),
//! moves one channel by `amount`, clamps, and builds a new value. The
//! conventional amount is `10`; `0` is honored as "no change", not a
//! missing argument.

use crate::color::{Color, Rgba};

impl Color {
    /// Increase lightness by `amount` percentage points.
    pub fn lighten(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsla();
        hsl.l = (hsl.l + amount / 100.0).clamp(0.0, 1.0);
        Color::new(hsl)
    }

    /// Decrease lightness by `amount` percentage points.
    pub fn darken(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsla();
        hsl.l = (hsl.l - amount / 100.0).clamp(0.0, 1.0);
        Color::new(hsl)
    }

    /// Increase saturation by `amount` percentage points.
    pub fn saturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsla();
        hsl.s = (hsl.s + amount / 100.0).clamp(0.0, 1.0);
        Color::new(hsl)
    }

    /// Decrease saturation by `amount` percentage points.
    pub fn desaturate(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsla();
        hsl.s = (hsl.s - amount / 100.0).clamp(0.0, 1.0);
        Color::new(hsl)
    }

    /// Fully desaturate.
    pub fn greyscale(&self) -> Color {
        self.desaturate(100.0)
    }

    /// Brighten in RGB space: every channel moves by
    /// `round(255 × amount / 100)`, clamped to byte range.
    pub fn brighten(&self, amount: f64) -> Color {
        let rgba = self.to_rgba();
        let step = (255.0 * amount / 100.0).round();
        let adjust = |channel: u8| (f64::from(channel) + step).clamp(0.0, 255.0) as u8;
        Color::new(Rgba {
            r: adjust(rgba.r),
            g: adjust(rgba.g),
            b: adjust(rgba.b),
            a: rgba.a,
        })
    }

    /// Rotate the hue by `amount` degrees, wrapping into `[0, 360)`.
    ///
    /// The starting hue is rounded to a whole degree first, so repeated
    /// spins stay on whole-degree hues.
    pub fn spin(&self, amount: f64) -> Color {
        let mut hsl = self.to_hsla();
        hsl.h = (hsl.h.round() + amount).rem_euclid(360.0);
        Color::new(hsl)
    }
}

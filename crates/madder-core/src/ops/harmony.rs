//! Harmony generators: color families derived by fixed hue rotations or
//! value stepping.
//!
//! Every generator that returns a sequence puts a copy of the base
//! color first. Hue arithmetic happens in HSL space and preserves
//! saturation, lightness and alpha; monochromatic steps the HSV value
//! channel and preserves hue and saturation.

use crate::color::{Color, Hsla, Hsva};

impl Color {
    /// The single color on the opposite side of the hue wheel.
    pub fn complement(&self) -> Color {
        let mut hsl = self.to_hsla();
        hsl.h = (hsl.h + 180.0).rem_euclid(360.0);
        Color::new(hsl)
    }

    /// Neighboring hues on the wheel.
    ///
    /// The wheel is divided into `slices` (conventionally 30) and the
    /// family spans `results` (conventionally 6) consecutive slices
    /// centered just below the base hue. `results` and `slices` are
    /// clamped to at least 1.
    pub fn analogous(&self, results: usize, slices: usize) -> Vec<Color> {
        let results = results.max(1);
        let part = 360.0 / slices.max(1) as f64;
        let hsl = self.to_hsla();

        let mut family = Vec::with_capacity(results);
        family.push(*self);
        let mut h = (hsl.h - part * (results / 2) as f64).rem_euclid(360.0);
        for _ in 1..results {
            h = (h + part).rem_euclid(360.0);
            family.push(Color::new(Hsla { h, ..hsl }));
        }
        family
    }

    /// Same hue and saturation, value stepped by `1/results` around the
    /// wheel. `results = 0` yields an empty family.
    pub fn monochromatic(&self, results: usize) -> Vec<Color> {
        let hsv = self.to_hsva();
        let step = 1.0 / results as f64;

        let mut family = Vec::with_capacity(results);
        let mut v = hsv.v;
        for i in 0..results {
            if i == 0 {
                family.push(*self);
            } else {
                family.push(Color::new(Hsva { v, ..hsv }));
            }
            v = (v + step) % 1.0;
        }
        family
    }

    /// Base color plus the hues at +72 and +216 degrees.
    pub fn split_complement(&self) -> Vec<Color> {
        self.hue_family(&[72.0, 216.0])
    }

    /// Base color plus the hues at +120 and +240 degrees.
    pub fn triad(&self) -> Vec<Color> {
        self.hue_family(&[120.0, 240.0])
    }

    /// Base color plus the hues at +90, +180 and +270 degrees.
    pub fn tetrad(&self) -> Vec<Color> {
        self.hue_family(&[90.0, 180.0, 270.0])
    }

    fn hue_family(&self, offsets: &[f64]) -> Vec<Color> {
        let hsl = self.to_hsla();
        let mut family = Vec::with_capacity(offsets.len() + 1);
        family.push(*self);
        for &offset in offsets {
            family.push(Color::new(Hsla {
                h: (hsl.h + offset).rem_euclid(360.0),
                ..hsl
            }));
        }
        family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue(color: &Color) -> f64 {
        color.to_hsla().h
    }

    #[test]
    fn test_complement_of_red_is_cyan() {
        assert_eq!(Color::parse("red").complement().to_hex_string(false), "#00ffff");
    }

    #[test]
    fn test_complement_twice_restores_hue() {
        let base = Color::parse("hsl(37, 80%, 60%)");
        let twice = base.complement().complement();
        assert!((hue(&twice) - hue(&base)).abs() < 0.05);
    }

    #[test]
    fn test_analogous_count_and_deltas() {
        let family = Color::parse("red").analogous(6, 30);
        assert_eq!(family.len(), 6);
        assert_eq!(family[0], Color::parse("red"));
        // Consecutive derived hues advance by 360/30 = 12 degrees.
        for pair in family[1..].windows(2) {
            let delta = (hue(&pair[1]) - hue(&pair[0])).rem_euclid(360.0);
            assert!((delta - 12.0).abs() < 0.05, "delta {delta}");
        }
    }

    #[test]
    fn test_analogous_starts_below_base_hue() {
        let family = Color::parse("hsl(120, 100%, 50%)").analogous(6, 30);
        // First derived element sits at base − 36 + 12 = base − 24.
        assert!((hue(&family[1]) - 96.0).abs() < 0.05);
    }

    #[test]
    fn test_analogous_zero_results_clamps_to_base() {
        let family = Color::parse("red").analogous(0, 30);
        assert_eq!(family.len(), 1);
        assert_eq!(family[0], Color::parse("red"));
    }

    #[test]
    fn test_monochromatic_steps_value() {
        let family = Color::parse("hsv(200, 50%, 10%)").monochromatic(6);
        assert_eq!(family.len(), 6);
        let values: Vec<f64> = family.iter().map(|c| c.to_hsva().v).collect();
        for (i, v) in values.iter().enumerate() {
            let expected = (0.1 + i as f64 / 6.0) % 1.0;
            assert!((v - expected).abs() < 1e-2, "element {i}: {v} vs {expected}");
        }
    }

    #[test]
    fn test_monochromatic_zero_results_is_empty() {
        assert!(Color::parse("red").monochromatic(0).is_empty());
    }

    #[test]
    fn test_split_complement_offsets() {
        let family = Color::parse("red").split_complement();
        assert_eq!(family.len(), 3);
        assert!((hue(&family[1]) - 72.0).abs() < 0.05);
        assert!((hue(&family[2]) - 216.0).abs() < 0.05);
    }

    #[test]
    fn test_triad_offsets() {
        let family = Color::parse("red").triad();
        assert_eq!(family.len(), 3);
        assert!((hue(&family[1]) - 120.0).abs() < 0.05);
        assert!((hue(&family[2]) - 240.0).abs() < 0.05);
    }

    #[test]
    fn test_tetrad_offsets() {
        let family = Color::parse("red").tetrad();
        assert_eq!(family.len(), 4);
        assert!((hue(&family[1]) - 90.0).abs() < 0.05);
        assert!((hue(&family[2]) - 180.0).abs() < 0.05);
        assert!((hue(&family[3]) - 270.0).abs() < 0.05);
    }

    #[test]
    fn test_harmonies_preserve_saturation_and_lightness() {
        let base = Color::parse("hsl(10, 80%, 40%)");
        for color in base.triad() {
            let hsl = color.to_hsla();
            assert!((hsl.s - 0.8).abs() < 1e-2);
            assert!((hsl.l - 0.4).abs() < 1e-2);
        }
    }

    #[test]
    fn test_harmonies_preserve_alpha() {
        let base = Color::parse("rgba(255, 0, 0, 0.5)");
        for color in base.tetrad() {
            assert_eq!(color.alpha(), 0.5);
        }
    }
}

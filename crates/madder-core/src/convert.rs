//! Pure color-space converters.
//!
//! Six conversions over plain numeric structures: RGB↔HSL, RGB↔HSV and
//! RGB↔hex. None of them touch the [`Color`](crate::Color) type, so each
//! is independently testable.
//!
//! Conventions:
//! - RGB channels are byte-range `[0, 255]` floats on both sides.
//! - Hue outputs are fractions of a turn, `h ∈ [0, 1)`; callers multiply
//!   by 360 for display.
//! - Saturation/lightness/value are fractions in `[0, 1]`.
//!
//! # Reference
//! The HSL formulas are the max/min branch form; HSV→RGB uses the sector
//! method (`i = floor(h·6)` indexing six channel permutations).

use crate::bounds::{self, Component};

/// Re-bound RGB components into byte range.
///
/// Exists to normalize percentage input: `rgb(50%, 0%, 100%)` becomes
/// `[127.5, 0, 255]`. Plain numeric components pass through clamped.
pub fn normalize_rgb(r: Component, g: Component, b: Component) -> [f64; 3] {
    [
        bounds::fraction(r, 255.0) * 255.0,
        bounds::fraction(g, 255.0) * 255.0,
        bounds::fraction(b, 255.0) * 255.0,
    ]
}

/// Convert byte-range RGB to HSL, all outputs fractions.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let r = bounds::fraction(Component::Number(r), 255.0);
    let g = bounds::fraction(Component::Number(g), 255.0);
    let b = bounds::fraction(Component::Number(b), 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [h / 6.0, s, l]
}

/// Convert HSL to byte-range RGB.
///
/// Components rather than plain floats: the hue bounds against 360 and
/// saturation/lightness against 100, so `hsl(120, 50%, 50%)` and a
/// structured input promoted through
/// [`to_percentage`](crate::bounds::to_percentage) take the same path.
pub fn hsl_to_rgb(h: Component, s: Component, l: Component) -> [f64; 3] {
    let h = bounds::fraction(h, 360.0);
    let s = bounds::fraction(s, 100.0);
    let l = bounds::fraction(l, 100.0);

    if s == 0.0 {
        // Achromatic.
        return [l * 255.0, l * 255.0, l * 255.0];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
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

/// Convert byte-range RGB to HSV, all outputs fractions.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let r = bounds::fraction(Component::Number(r), 255.0);
    let g = bounds::fraction(Component::Number(g), 255.0);
    let b = bounds::fraction(Component::Number(b), 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if max == min {
        // Achromatic.
        return [0.0, s, v];
    }

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [h / 6.0, s, v]
}

/// Convert HSV to byte-range RGB via the sector method.
pub fn hsv_to_rgb(h: Component, s: Component, v: Component) -> [f64; 3] {
    let h = bounds::fraction(h, 360.0) * 6.0;
    let s = bounds::fraction(s, 100.0);
    let v = bounds::fraction(v, 100.0);

    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [r * 255.0, g * 255.0, b * 255.0]
}

/// Render byte-range RGB as a bare hex string (no `#`).
///
/// With `allow_3` set, collapses to the 3-digit form when every channel
/// pair is a repeated digit (`aabbcc` → `abc`).
pub fn rgb_to_hex(r: f64, g: f64, b: f64, allow_3: bool) -> String {
    let bytes = [round_byte(r), round_byte(g), round_byte(b)];
    let hex = format!("{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2]);
    if allow_3 && bytes.iter().all(|&c| (c >> 4) == (c & 0x0f)) {
        let h = hex.as_bytes();
        return format!("{}{}{}", h[0] as char, h[2] as char, h[4] as char);
    }
    hex
}

/// Render byte-range RGB plus alpha as an 8-digit hex string, alpha first.
pub fn rgba_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        round_byte(a * 255.0),
        round_byte(r),
        round_byte(g),
        round_byte(b)
    )
}

fn round_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn num(value: f64) -> Component {
        Component::Number(value)
    }

    #[test]
    fn test_normalize_rgb_percentages() {
        let [r, g, b] = normalize_rgb(
            Component::Percent(50.0),
            Component::Percent(0.0),
            Component::Percent(100.0),
        );
        assert!((r - 127.5).abs() < EPSILON);
        assert!(g.abs() < EPSILON);
        assert!((b - 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let [h, s, l] = rgb_to_hsl(255.0, 0.0, 0.0);
        assert!(h.abs() < EPSILON);
        assert!((s - 1.0).abs() < EPSILON);
        assert!((l - 0.5).abs() < EPSILON);

        let [h, _, _] = rgb_to_hsl(0.0, 255.0, 0.0);
        assert!((h - 1.0 / 3.0).abs() < EPSILON);

        let [h, _, _] = rgb_to_hsl(0.0, 0.0, 255.0);
        assert!((h - 2.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let [h, s, l] = rgb_to_hsl(128.0, 128.0, 128.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 128.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_hsl_to_rgb_achromatic_shortcut() {
        let [r, g, b] = hsl_to_rgb(num(210.0), Component::Percent(0.0), Component::Percent(50.0));
        assert!((r - g).abs() < EPSILON);
        assert!((g - b).abs() < EPSILON);
    }

    #[test]
    fn test_hsl_to_rgb_accepts_percent_strings() {
        let [r, g, b] = hsl_to_rgb(num(0.0), Component::Percent(100.0), Component::Percent(50.0));
        assert!((r - 255.0).abs() < EPSILON);
        assert!(g.abs() < EPSILON);
        assert!(b.abs() < EPSILON);
    }

    #[test]
    fn test_rgb_to_hsv_value_is_max() {
        let [_, s, v] = rgb_to_hsv(64.0, 128.0, 255.0);
        assert!((v - 1.0).abs() < EPSILON);
        assert!((s - (255.0 - 64.0) / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_to_hsv_black_has_zero_saturation() {
        let [h, s, v] = rgb_to_hsv(0.0, 0.0, 0.0);
        assert_eq!([h, s, v], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_sector_permutations() {
        // One probe per 60-degree sector.
        for (hue, expected) in [
            (30.0, [255.0, 127.5, 0.0]),
            (90.0, [127.5, 255.0, 0.0]),
            (150.0, [0.0, 255.0, 127.5]),
            (210.0, [0.0, 127.5, 255.0]),
            (270.0, [127.5, 0.0, 255.0]),
            (330.0, [255.0, 0.0, 127.5]),
        ] {
            let [r, g, b] =
                hsv_to_rgb(num(hue), Component::Percent(100.0), Component::Percent(100.0));
            assert!((r - expected[0]).abs() < 1e-6, "hue {hue}: r {r}");
            assert!((g - expected[1]).abs() < 1e-6, "hue {hue}: g {g}");
            assert!((b - expected[2]).abs() < 1e-6, "hue {hue}: b {b}");
        }
    }

    #[test]
    fn test_rgb_to_hex_basic() {
        assert_eq!(rgb_to_hex(255.0, 0.0, 0.0, false), "ff0000");
        assert_eq!(rgb_to_hex(26.0, 43.0, 60.0, false), "1a2b3c");
    }

    #[test]
    fn test_rgb_to_hex_three_char_collapse() {
        assert_eq!(rgb_to_hex(255.0, 0.0, 0.0, true), "f00");
        assert_eq!(rgb_to_hex(170.0, 187.0, 204.0, true), "abc");
        // 1a2b3c has no repeating pairs; stays 6 digits.
        assert_eq!(rgb_to_hex(26.0, 43.0, 60.0, true), "1a2b3c");
    }

    #[test]
    fn test_rgba_to_hex_alpha_first() {
        assert_eq!(rgba_to_hex(255.0, 0.0, 0.0, 1.0), "ffff0000");
        assert_eq!(rgba_to_hex(255.0, 0.0, 0.0, 0.0), "00ff0000");
        assert_eq!(rgba_to_hex(0.0, 0.0, 0.0, 0.5), "80000000");
    }

    #[test]
    fn test_hsl_matches_palette_reference() {
        use palette::{FromColor, Hsl, Srgb};

        for (r, g, b) in [
            (255.0, 0.0, 0.0),
            (64.0, 128.0, 192.0),
            (10.0, 200.0, 30.0),
            (240.0, 240.0, 12.0),
        ] {
            let [h, s, l] = rgb_to_hsl(r, g, b);
            let reference = Hsl::from_color(Srgb::new(
                (r / 255.0) as f32,
                (g / 255.0) as f32,
                (b / 255.0) as f32,
            ));
            let ref_h = f64::from(reference.hue.into_positive_degrees()) / 360.0;
            assert!((h - ref_h).abs() < 1e-4, "hue for ({r},{g},{b}): {h} vs {ref_h}");
            assert!((s - f64::from(reference.saturation)).abs() < 1e-4);
            assert!((l - f64::from(reference.lightness)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hsv_matches_palette_reference() {
        use palette::{FromColor, Hsv, Srgb};

        for (r, g, b) in [(255.0, 0.0, 0.0), (64.0, 128.0, 192.0), (200.0, 10.0, 150.0)] {
            let [h, s, v] = rgb_to_hsv(r, g, b);
            let reference = Hsv::from_color(Srgb::new(
                (r / 255.0) as f32,
                (g / 255.0) as f32,
                (b / 255.0) as f32,
            ));
            let ref_h = f64::from(reference.hue.into_positive_degrees()) / 360.0;
            assert!((h - ref_h).abs() < 1e-4);
            assert!((s - f64::from(reference.saturation)).abs() < 1e-4);
            assert!((v - f64::from(reference.value)).abs() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_hsl_round_trip_within_tolerance(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let [h, s, l] = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
            let [r2, g2, b2] = hsl_to_rgb(
                num(h * 360.0),
                Component::Percent(s * 100.0),
                Component::Percent(l * 100.0),
            );
            prop_assert!((f64::from(r) - r2).abs() <= 2.0);
            prop_assert!((f64::from(g) - g2).abs() <= 2.0);
            prop_assert!((f64::from(b) - b2).abs() <= 2.0);
        }

        #[test]
        fn prop_hsv_round_trip_within_tolerance(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let [h, s, v] = rgb_to_hsv(f64::from(r), f64::from(g), f64::from(b));
            let [r2, g2, b2] = hsv_to_rgb(
                num(h * 360.0),
                Component::Percent(s * 100.0),
                Component::Percent(v * 100.0),
            );
            prop_assert!((f64::from(r) - r2).abs() <= 2.0);
            prop_assert!((f64::from(g) - g2).abs() <= 2.0);
            prop_assert!((f64::from(b) - b2).abs() <= 2.0);
        }

        #[test]
        fn prop_hex8_alpha_round_trip(a in 0.0f64..=1.0) {
            let hex = rgba_to_hex(0.0, 0.0, 0.0, a);
            let byte = u8::from_str_radix(&hex[0..2], 16).unwrap();
            prop_assert!((f64::from(byte) / 255.0 - a).abs() <= 1.0 / 255.0);
        }
    }
}

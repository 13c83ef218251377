//! Readability scoring between a foreground and background color.
//!
//! The heuristic combines brightness difference with the summed
//! per-channel range difference, the classic W3C accessibility
//! approximation (thresholds 125 and 500) rather than a true contrast
//! ratio.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Brightness threshold for sufficient contrast.
const BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// Color-difference threshold for sufficient contrast.
const COLOR_THRESHOLD: f64 = 500.0;

/// The two components of the readability heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    /// Absolute difference of the perceptual brightness values, `[0, 255]`.
    pub brightness: f64,
    /// Summed per-channel range difference, `[0, 765]`.
    pub color: f64,
}

/// Score the contrast between two colors.
pub fn readability(first: &Color, second: &Color) -> Readability {
    let a = first.to_rgba();
    let b = second.to_rgba();
    let range = |ca: u8, cb: u8| f64::from(ca.max(cb)) - f64::from(ca.min(cb));
    Readability {
        brightness: (first.brightness() - second.brightness()).abs(),
        color: range(a.r, b.r) + range(a.g, b.g) + range(a.b, b.b),
    }
}

/// Whether `foreground` on `background` clears both thresholds.
pub fn is_readable(foreground: &Color, background: &Color) -> bool {
    let score = readability(foreground, background);
    score.brightness > BRIGHTNESS_THRESHOLD && score.color > COLOR_THRESHOLD
}

/// Pick the candidate that reads best against `base`.
///
/// Candidates are scored `3 × brightness/125 + color/500`; any candidate
/// clearing both thresholds beats every one that does not, regardless of
/// raw score. Ties keep the first-seen candidate. Empty input yields
/// `None`.
pub fn most_readable(base: &Color, candidates: &[Color]) -> Option<Color> {
    let mut best: Option<(Color, f64, bool)> = None;
    for candidate in candidates {
        let score = readability(base, candidate);
        let readable =
            score.brightness > BRIGHTNESS_THRESHOLD && score.color > COLOR_THRESHOLD;
        let value = 3.0 * (score.brightness / BRIGHTNESS_THRESHOLD)
            + score.color / COLOR_THRESHOLD;

        let wins = match best {
            None => true,
            Some((_, best_value, best_readable)) => {
                (readable && !best_readable)
                    || (readable == best_readable && value > best_value)
            }
        };
        if wins {
            best = Some((*candidate, value, readable));
        }
    }
    best.map(|(color, _, _)| color)
}

//! Alpha-aware linear mixing of two colors.

use crate::bounds::Component;
use crate::color::Color;
use crate::parse::ColorInput;

/// Blend `amount` percent of `second` into `first`.
///
/// The channel weights account for the alpha difference between the two
/// inputs, so mixing against a transparent color does not drag the
/// visible channels toward it. Endpoints are exact: `amount = 0` yields
/// `first`, `amount = 100` yields `second` (channel and alpha equality
/// over the rounded channels the blend operates on).
pub fn mix(first: &Color, second: &Color, amount: f64) -> Color {
    let a = first.to_rgba();
    let b = second.to_rgba();

    let p = amount.clamp(0.0, 100.0) / 100.0;
    let w = p * 2.0 - 1.0;
    let d = b.a - a.a;

    let w1 = if w * d == -1.0 { w } else { (w + d) / (1.0 + w * d) };
    let w1 = (w1 + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    let channel = |cb: u8, ca: u8| f64::from(cb) * w1 + f64::from(ca) * w2;
    Color::new(ColorInput::Rgb {
        r: Component::Number(channel(b.r, a.r)),
        g: Component::Number(channel(b.g, a.g)),
        b: Component::Number(channel(b.b, a.b)),
        a: Some(Component::Number(b.a * p + a.a * (1.0 - p))),
    })
}

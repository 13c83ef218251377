//! Input model and string grammar.
//!
//! [`ColorInput`] is the tagged union of everything the constructors
//! accept: a text literal, a structured RGB/HSL/HSV triple, or an
//! existing [`Color`]. [`resolve`] turns any variant into canonical
//! byte-range channels plus a detected source-format tag.
//!
//! The text grammar is deliberately permissive, matching what browsers
//! and the CSS ecosystem tolerate: function forms accept any mix of
//! whitespace, commas or pipes between components and do not require
//! parentheses (`"rgb 255 0 0"` parses), and hex literals take an
//! optional `#`. Grammars are tried in a fixed precedence order; the
//! first match wins. No match never errors — it produces an invalid
//! value and a `tracing` warning.

use crate::bounds::{self, Component};
use crate::color::{Color, Hsla, Hsva, Rgba};
use crate::convert;
use crate::format::ColorFormat;
use crate::names;

/// Every input shape the constructors accept.
///
/// The explicit tags replace property-presence probing: an RGB input is
/// an RGB input because the caller said so, not because it happens to
/// have an `r` field.
#[derive(Debug, Clone)]
pub enum ColorInput {
    Rgb { r: Component, g: Component, b: Component, a: Option<Component> },
    Hsl { h: Component, s: Component, l: Component, a: Option<Component> },
    Hsv { h: Component, s: Component, v: Component, a: Option<Component> },
    Text(String),
    Existing(Color),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        Self::Existing(value)
    }
}

impl From<Rgba> for ColorInput {
    fn from(value: Rgba) -> Self {
        Self::Rgb {
            r: Component::Number(f64::from(value.r)),
            g: Component::Number(f64::from(value.g)),
            b: Component::Number(f64::from(value.b)),
            a: Some(Component::Number(value.a)),
        }
    }
}

impl From<Hsla> for ColorInput {
    fn from(value: Hsla) -> Self {
        Self::Hsl {
            h: Component::Number(value.h),
            s: bounds::to_percentage(value.s),
            l: bounds::to_percentage(value.l),
            a: Some(Component::Number(value.a)),
        }
    }
}

impl From<Hsva> for ColorInput {
    fn from(value: Hsva) -> Self {
        Self::Hsv {
            h: Component::Number(value.h),
            s: bounds::to_percentage(value.s),
            v: bounds::to_percentage(value.v),
            a: Some(Component::Number(value.a)),
        }
    }
}

/// Canonical channels plus detection metadata, before clamping into the
/// final [`Color`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    pub format: Option<ColorFormat>,
    pub valid: bool,
}

impl Resolved {
    /// Best-effort stand-in for unrecognized input: opaque black.
    fn invalid() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0, format: None, valid: false }
    }
}

/// Resolve any input variant to canonical channels.
pub(crate) fn resolve(input: &ColorInput) -> Resolved {
    match input {
        ColorInput::Rgb { r, g, b, a } => {
            let [red, green, blue] = convert::normalize_rgb(*r, *g, *b);
            let format = if r.is_percent() { ColorFormat::Prgb } else { ColorFormat::Rgb };
            Resolved {
                r: red,
                g: green,
                b: blue,
                a: resolve_alpha(*a),
                format: Some(format),
                valid: true,
            }
        }
        ColorInput::Hsl { h, s, l, a } => {
            let [red, green, blue] = convert::hsl_to_rgb(*h, *s, *l);
            Resolved {
                r: red,
                g: green,
                b: blue,
                a: resolve_alpha(*a),
                format: Some(ColorFormat::Hsl),
                valid: true,
            }
        }
        ColorInput::Hsv { h, s, v, a } => {
            let [red, green, blue] = convert::hsv_to_rgb(*h, *s, *v);
            Resolved {
                r: red,
                g: green,
                b: blue,
                a: resolve_alpha(*a),
                format: Some(ColorFormat::Hsv),
                valid: true,
            }
        }
        ColorInput::Text(text) => parse_text(text),
        ColorInput::Existing(color) => Resolved {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: color.alpha(),
            format: color.source_format(),
            valid: color.is_valid(),
        },
    }
}

fn resolve_alpha(a: Option<Component>) -> f64 {
    a.map(bounds::alpha).unwrap_or(1.0)
}

fn parse_text(text: &str) -> Resolved {
    let normalized = text.trim().to_lowercase();
    match parse_normalized(&normalized) {
        Some(resolved) => resolved,
        None => {
            tracing::warn!("unrecognized color input: {text:?}");
            Resolved::invalid()
        }
    }
}

/// Grammar precedence: keyword, `transparent`, function forms, hex.
fn parse_normalized(text: &str) -> Option<Resolved> {
    if let Some(hex) = names::hex_for(text) {
        let mut resolved = parse_hex(hex)?;
        resolved.format = Some(ColorFormat::Name);
        return Some(resolved);
    }
    if text == "transparent" {
        return Some(Resolved {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
            format: Some(ColorFormat::Name),
            valid: true,
        });
    }

    // Longest prefix first so "rgba" is never consumed as "rgb" + residue.
    if let Some(body) = text.strip_prefix("rgba") {
        let [r, g, b, a] = components::<4>(body)?;
        return Some(resolve(&ColorInput::Rgb { r, g, b, a: Some(a) }));
    }
    if let Some(body) = text.strip_prefix("rgb") {
        let [r, g, b] = components::<3>(body)?;
        return Some(resolve(&ColorInput::Rgb { r, g, b, a: None }));
    }
    if let Some(body) = text.strip_prefix("hsla") {
        let [h, s, l, a] = components::<4>(body)?;
        return Some(resolve(&ColorInput::Hsl { h, s, l, a: Some(a) }));
    }
    if let Some(body) = text.strip_prefix("hsl") {
        let [h, s, l] = components::<3>(body)?;
        return Some(resolve(&ColorInput::Hsl { h, s, l, a: None }));
    }
    if let Some(body) = text.strip_prefix("hsva") {
        let [h, s, v, a] = components::<4>(body)?;
        return Some(resolve(&ColorInput::Hsv { h, s, v, a: Some(a) }));
    }
    if let Some(body) = text.strip_prefix("hsv") {
        let [h, s, v] = components::<3>(body)?;
        return Some(resolve(&ColorInput::Hsv { h, s, v, a: None }));
    }

    parse_hex(text.strip_prefix('#').unwrap_or(text))
}

/// Split a function-form body into exactly `N` components.
///
/// Separators are whitespace, commas, pipes and parentheses. Any extra
/// token is residue and fails the match.
fn components<const N: usize>(body: &str) -> Option<[Component; N]> {
    let mut out = [Component::Number(0.0); N];
    let mut count = 0;
    let separators = |c: char| c.is_whitespace() || matches!(c, ',' | '|' | '(' | ')');
    for token in body.split(separators) {
        if token.is_empty() {
            continue;
        }
        if count == N {
            return None;
        }
        out[count] = Component::parse(token)?;
        count += 1;
    }
    (count == N).then_some(out)
}

/// Hex literals: 8 digits (`AARRGGBB`, alpha first), 6, or 3 (each digit
/// duplicated).
fn parse_hex(hex: &str) -> Option<Resolved> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let pair = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok().map(f64::from)
    };
    match hex.len() {
        8 => Some(Resolved {
            a: bounds::normalize_alpha(pair(0..2)? / 255.0),
            r: pair(2..4)?,
            g: pair(4..6)?,
            b: pair(6..8)?,
            format: Some(ColorFormat::Hex8),
            valid: true,
        }),
        6 => Some(Resolved {
            r: pair(0..2)?,
            g: pair(2..4)?,
            b: pair(4..6)?,
            a: 1.0,
            format: Some(ColorFormat::Hex),
            valid: true,
        }),
        3 => {
            let digit = |i: usize| {
                u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| f64::from(d) * 17.0)
            };
            Some(Resolved {
                r: digit(0)?,
                g: digit(1)?,
                b: digit(2)?,
                a: 1.0,
                format: Some(ColorFormat::Hex3),
                valid: true,
            })
        }
        _ => None,
    }
}

//! Numeric bounding policy for color components.
//!
//! CSS grammars allow a channel to be written as an integer (`128`), a
//! decimal (`0.5`) or a percentage (`50%`). [`Component`] is the typed
//! carrier for that distinction; [`fraction`] turns a component into a
//! normalized fraction of its channel maximum.

/// A single color component as written in the input: either a plain number
/// or a percentage of the channel maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    /// A plain numeric value, interpreted against the channel range.
    Number(f64),
    /// A percentage of the channel maximum.
    Percent(f64),
}

impl Component {
    /// Parse one CSS unit token.
    ///
    /// A trailing `%` makes the component a percentage. A token written
    /// with a decimal point whose value is exactly `1.0` is read as
    /// `100%` — in the source grammars `"1.0"` for a saturation or alpha
    /// channel always means "all of it", never 1 out of 100.
    ///
    /// Returns `None` for anything that does not parse as a finite
    /// number (`"nan"` and `"inf"` are numbers to `f64::from_str`, not
    /// to a color grammar).
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(stripped) = token.strip_suffix('%') {
            return parse_finite(stripped.trim()).map(Self::Percent);
        }
        let value = parse_finite(token)?;
        if token.contains('.') && value == 1.0 {
            return Some(Self::Percent(100.0));
        }
        Some(Self::Number(value))
    }

    /// The raw numeric value, ignoring the unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Number(n) | Self::Percent(n) => n,
        }
    }

    /// Whether this component was written as a percentage.
    pub fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Normalize a component into a fraction of `max`.
///
/// Policy, in order:
/// 1. clamp the raw value into `[0, max]`;
/// 2. percentages rescale as `floor(value × max) / 100`;
/// 3. values within `1e-6` of `max` snap to exactly `1`;
/// 4. otherwise return `(value mod max) / max`.
///
/// The final wrap-around is intentional: hues written as negative or
/// above 360 wrap cyclically. For saturation/lightness/value the inputs
/// are already clamped into `[0, max]`, so the wrap is a no-op.
pub fn fraction(component: Component, max: f64) -> f64 {
    if !component.value().is_finite() {
        return 0.0;
    }
    let mut value = component.value().clamp(0.0, max);
    if component.is_percent() {
        value = (value * max).floor() / 100.0;
    }
    if (value - max).abs() < 1e-6 {
        return 1.0;
    }
    (value % max) / max
}

/// Normalize an alpha component into `[0, 1]`.
///
/// Anything non-finite or outside the range means "opaque": the value
/// collapses to `1` rather than being rejected.
pub fn alpha(component: Component) -> f64 {
    normalize_alpha(component.value())
}

/// Normalize a raw alpha value; NaN and out-of-range collapse to `1`.
pub fn normalize_alpha(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) { value } else { 1.0 }
}

/// Promote a structured saturation/lightness/value field to a component.
///
/// Struct inputs may carry these channels as `[0, 1]` fractions or as
/// percentage magnitudes; anything at or below `1` is read as a fraction
/// and promoted to a percentage so [`fraction`] treats both spellings
/// uniformly.
pub fn to_percentage(value: f64) -> Component {
    if value <= 1.0 {
        Component::Percent(value * 100.0)
    } else {
        Component::Number(value)
    }
}

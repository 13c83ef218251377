//! Madder Core — color value model and conversion engine.
//!
//! Interprets heterogeneous color inputs (CSS-style strings, structured
//! RGB/HSL/HSV triples, existing values) into one canonical
//! representation, converts between color spaces, formats back to any
//! of the textual notations, derives related colors (harmonies,
//! lightened/darkened/mixed variants) and scores perceptual readability
//! between two colors. No I/O, no shared mutable state; construction is
//! total and malformed input never panics.

pub mod bounds;
pub mod color;
pub mod convert;
pub mod format;
pub mod names;
pub mod ops;
pub mod parse;

// Re-exports for convenience.
pub use bounds::Component;
pub use color::{Color, Hsla, Hsva, Options, ParseColorError, Rgba};
pub use format::ColorFormat;
pub use ops::mix::mix;
pub use ops::readability::{is_readable, most_readable, readability, Readability};
pub use parse::ColorInput;

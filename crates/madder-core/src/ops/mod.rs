//! Derived-color operations.
//!
//! Channel adjusters and harmony generators are methods on
//! [`Color`](crate::Color); mixing and readability scoring are free
//! functions over one or two values. Everything here returns new values
//! and leaves its inputs untouched.

pub mod adjust;
pub mod harmony;
pub mod mix;
pub mod readability;

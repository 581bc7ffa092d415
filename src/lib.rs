//! Modern language feature demo
//!
//! This library backs the `mdemo` binary, which prints a fixed
//! demonstration transcript exercising:
//! - A lazy filter/transform pipeline over the integers 1..=10
//! - A generic squaring function constrained by a capability trait
//! - A guarded string-formatting step with a fixed fallback line
//! - A platform label selected at compile time
//!
//! The transcript itself is assembled in [`transcript`] so tests can
//! assert on the full output without spawning the binary.

pub mod cli;
pub mod numeric;
pub mod platform;
pub mod sequence;
pub mod slogan;
pub mod transcript;

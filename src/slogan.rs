//! Guarded slogan formatting with a fixed fallback
//!
//! The slogan line is produced by substituting a word into a template.
//! If the formatter reports an error the fallback line is printed
//! instead, with no diagnostic; the error never leaves this module.

use std::fmt::Write;

use thiserror::Error;

/// Word substituted into the template.
const SUBSTITUTION: &str = "really";

/// Line emitted when formatting is unavailable.
pub const FALLBACK: &str = "✨ C++20 is really awesome! (format not available)";

/// Error from the formatting attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SloganError {
    /// The underlying formatter reported a failure
    #[error("formatter unavailable: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Attempt the formatted slogan.
///
/// Returns `✨ C++20 is really awesome!` on success. The only failure
/// source is the formatter itself.
pub fn try_render() -> Result<String, SloganError> {
    let mut line = String::new();
    write!(line, "✨ C++20 is {} awesome!", SUBSTITUTION)?;
    Ok(line)
}

/// Render the slogan, falling back to [`FALLBACK`] on any error.
///
/// Both paths carry the same visible sentence; the fallback only adds a
/// parenthesized suffix. The error is discarded, never logged or
/// retried.
pub fn render() -> String {
    try_render().unwrap_or_else(|_| FALLBACK.to_string())
}

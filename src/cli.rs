//! Command-line entry point
//!
//! The demo reads no arguments, flags, or environment variables; running
//! it prints the transcript and reports success. There is no failure
//! path.

use std::process::ExitCode;

use crate::transcript;

/// Exit code for the one supported outcome
pub(crate) const EXIT_SUCCESS: u8 = 0;

/// Print the demo transcript to stdout and report success.
pub fn run() -> ExitCode {
    print!("{}", transcript::render());
    ExitCode::from(EXIT_SUCCESS)
}

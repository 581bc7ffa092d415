//! mdemo - prints the modern language feature demo transcript

use std::process::ExitCode;

use modern_demo::cli;

fn main() -> ExitCode {
    cli::run()
}

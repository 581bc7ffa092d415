//! Transcript assembly
//!
//! Builds the full demo output as one `String`, in the fixed step order:
//! banner, source numbers, even squares, slogan, generic squaring,
//! platform label, closing line. The returned text is the program's
//! entire wire contract.

use crate::numeric::square;
use crate::platform::Platform;
use crate::sequence::{even_squares, source_numbers, spaced_row};
use crate::slogan;

/// Render the complete demo transcript.
///
/// Deterministic for a given build; only the platform line varies across
/// build targets.
pub fn render() -> String {
    let numbers = source_numbers();

    let mut out = String::new();
    out.push_str("🚀 Modern C++20 Demo\n");
    out.push_str("====================\n\n");

    out.push_str("📊 Original numbers: ");
    out.push_str(&spaced_row(numbers.iter().copied()));
    out.push('\n');

    out.push_str("🔢 Even numbers squared: ");
    out.push_str(&spaced_row(even_squares(numbers)));
    out.push('\n');

    out.push_str(&slogan::render());
    out.push('\n');

    out.push_str("\n🧮 Concepts demo:\n");
    out.push_str(&format!("Square of 5: {}\n", square(5)));
    out.push_str(&format!("Square of 3.14: {}\n", square(3.14_f64)));

    out.push_str(&format!("\n🖥️  Platform: {}\n", Platform::CURRENT));

    out.push_str("\n✅ C++20 demo completed successfully!\n");
    out
}

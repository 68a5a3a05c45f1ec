//! Level descriptions and filling instructions shown beside the form.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::grid::Level;

pub const INSTRUCTIONS: [&str; 5] = [
    "Start from each level of measurement and rate them across the segments",
    "Rate each segment using a scale 1 to 8, 1 = lowest and 8 = highest",
    "Complete the mapping based on your own analysis",
    "Try to complete the mapping within 10 minutes",
    "The mapping should be done in the presence of a District Head",
];

pub fn format_guide() -> String {
    let mut output = String::from("Levels\n");
    for level in Level::iter() {
        let _ = writeln!(output, "  {:<12} {}", level.name(), level.description());
    }
    output.push_str("\nInstructions\n");
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let _ = writeln!(output, "  {}) {}", i + 1, line);
    }
    output
}

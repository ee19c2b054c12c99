//! Output line format shared by every backend
//!
//! A line is the level label, one space, then the values rendered with
//! `Display` inside brackets and separated by `", "`:
//!
//! ```text
//! Emergency [disk full, 93]
//! ```

use std::fmt::Display;

/// Render a record without its line terminator
pub fn format_record(level: &str, values: &[&dyn Display]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("{level} [{}]", rendered.join(", "))
}

/// Render a full output line, terminator included
pub fn format_line(level: &str, values: &[&dyn Display]) -> String {
    let mut line = format_record(level, values);
    line.push('\n');
    line
}

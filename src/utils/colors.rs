/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Pace change color:
/// \>0 (slower) → red
/// \<0 (faster) → green
/// 0 → reset
pub fn color_for_pace_change(percent: f64) -> &'static str {
    if percent > 0.0 {
        RED
    } else if percent < 0.0 {
        GREEN
    } else {
        RESET
    }
}

/// Grey out placeholders such as `--` or empty notes.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders for missing values ("--:--", "-", ""); leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    match value.trim() {
        "" | "-" | "--:--" => format!("{GREY}{value}{RESET}"),
        _ => value.to_string(),
    }
}

use std::fmt;

use colored::Colorize;

/// Print an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

/// Print a success message.
pub fn success(message: impl fmt::Display) {
    println!("{} {}", "OK:".green().bold(), message);
}

/// Print a warning message.
pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print an error message.
pub fn error(message: impl fmt::Display) {
    println!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a section header.
pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

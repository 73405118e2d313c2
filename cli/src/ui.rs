use colored::Colorize;
use std::path::Path;
use version::{Update, Version};

/// Print the current version of a file
pub fn version_line(path: &Path, version: &Version) {
    println!("{}: {}", path.display(), version);
}

/// Print the outcome of an update
pub fn update_line(path: &Path, update: &Update) {
    println!("Updated {}: {} → {}", path.display(), update.old, update.new);
}

/// Print a warning message
pub fn warning_message(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}

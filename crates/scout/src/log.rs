//! Prefix-tagged diagnostics on stderr
//!
//! All output goes to stderr so piped card output stays clean.

use chrono::Local;
use colored::*;

fn emit(prefix: &str, message: &str) {
  for line in message.lines() {
    eprintln!("{prefix} {line}");
  }
}

pub fn info(message: &str) {
  emit(&format!("[{}]", "info".blue().bold()), message);
}

pub fn warn(message: &str) {
  emit(&format!("[{}]", "warn".yellow().bold()), message);
}

pub fn error(message: &str) {
  emit(&format!("[{}]", "error".red().bold()), message);
}

pub fn success(message: &str) {
  emit(&format!("[{}]", "sccs".green().bold()), message);
}

/// Timestamped error event, used where a request fails.
pub fn event_error(message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  emit(&format!("[{}] [{}]", "event".red().bold(), timestamp.cyan()), message);
}

/// A full-width line of `border_char`.
pub fn banner_line(width: usize, border_char: char) -> String {
  border_char.to_string().repeat(width)
}

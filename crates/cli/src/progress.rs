//! Progress indicators
//!
//! Spinners for network operations. Nothing is drawn when stderr is not a
//! terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate progress
pub fn spinner(message: &str) -> ProgressBar {
    if !console::user_attended_stderr() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success message
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {message}"));
}

/// Finish a spinner with a warning message
pub fn finish_warning(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("⚠ {message}"));
}

/// Remove a spinner without leaving a line behind
pub fn clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let pb = spinner("Syncing...");
        finish_success(&pb, "done");
        assert!(pb.is_finished());
    }

    #[test]
    fn test_clear() {
        let pb = spinner("Fetching...");
        clear(&pb);
        assert!(pb.is_finished());
    }
}

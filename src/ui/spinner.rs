use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy indicator shown while a completion call is outstanding.
///
/// Clears itself when dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress_bar.set_style(style);
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;

use crate::output;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TEMPLATE: &str = "{spinner} {msg} ({elapsed})";

/// Progress indicator on stderr for an in-flight translation request.
///
/// Cleared when stopped or dropped, so it never mixes with the translated
/// text on stdout.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner announcing a translation into `target_language`.
    pub fn translating(target_language: &str) -> Self {
        let visible = is_visible(output::is_quiet(), io::stderr().is_terminal());
        Self::start(format!("Translating to {target_language}"), visible)
    }

    fn start(message: String, visible: bool) -> Self {
        if !visible {
            return Self {
                progress_bar: ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
            };
        }

        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let progress_bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
            .with_style(style)
            .with_message(message);
        progress_bar.enable_steady_tick(TICK_INTERVAL);

        Self { progress_bar }
    }

    /// Stops the spinner and clears its line.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
        }
    }
}

/// The spinner only draws on an interactive stderr outside quiet mode.
const fn is_visible(quiet: bool, terminal: bool) -> bool {
    !quiet && terminal
}

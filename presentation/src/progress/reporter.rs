//! Progress spinner shown while a lookup is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the bot waits for Wikipedia.
///
/// Replies that arrive while the spinner runs must print through
/// [`suspend`](Self::suspend) so the spinner line does not mangle them.
pub struct LookupSpinner {
    bar: ProgressBar,
}

impl LookupSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    /// Hide the spinner while `f` prints, then redraw it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Stop the spinner and erase its line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for LookupSpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Start / succeed / fail status line for a long running step.
///
/// The spinner is only drawn on a terminal, the final line is always printed.
pub struct Indicator {
    spinner: Option<ProgressBar>,
    hidden: bool,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator {
    #[must_use]
    pub fn new() -> Self {
        Indicator {
            spinner: None,
            hidden: false,
        }
    }

    /// Never draws nor prints anything.
    #[must_use]
    pub fn hidden() -> Self {
        Indicator {
            spinner: None,
            hidden: true,
        }
    }

    pub fn start(&mut self, message: impl Into<String>) {
        self.clear();
        if self.hidden {
            return;
        }

        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.into());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    pub fn succeed(&mut self, message: impl AsRef<str>) {
        self.clear();
        if !self.hidden {
            eprintln!(
                "{} {}",
                "✔".if_supports_color(owo_colors::Stream::Stderr, |s| s.green()),
                message.as_ref()
            );
        }
    }

    pub fn fail(&mut self, message: impl AsRef<str>) {
        self.clear();
        if !self.hidden {
            eprintln!(
                "{} {}",
                "✖".if_supports_color(owo_colors::Stream::Stderr, |s| s.red()),
                message.as_ref()
            );
        }
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinner.is_some()
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for Indicator {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut indicator = Indicator::new();
        assert!(!indicator.is_spinning());

        indicator.start("cloning");
        assert!(indicator.is_spinning());

        indicator.succeed("cloned");
        assert!(!indicator.is_spinning());

        indicator.start("processing");
        indicator.fail("failed");
        assert!(!indicator.is_spinning());
    }

    #[test]
    fn hidden_never_spins() {
        let mut indicator = Indicator::hidden();
        indicator.start("cloning");
        assert!(!indicator.is_spinning());
    }
}

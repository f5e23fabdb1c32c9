use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Spinner shown on stderr while a dataset is fetched or downloaded.
pub struct TaskSpinner {
    pb: ProgressBar,
}

impl TaskSpinner {
    pub fn start(message: impl Into<String>) -> Self {
        Self::with_target(message, ProgressDrawTarget::stderr())
    }

    fn with_target(message: impl Into<String>, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message(message.into());
        pb.set_draw_target(target);
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.pb.set_message(message.into());
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(format!("✓ {}", message.into()));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.abandon_with_message(format!("✗ {}", message.into()));
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

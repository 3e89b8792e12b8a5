use crate::utils::ProgressStyleTemplate;
use indicatif::{MultiProgress, ProgressBar};
use std::time::Duration;

pub trait MultiProgressNew {
    /// Adds a ticking spinner labelled with `stage`.
    fn add_stage(&self, stage: &str, message: impl Into<String>) -> ProgressBar;
}

impl MultiProgressNew for MultiProgress {
    fn add_stage(&self, stage: &str, message: impl Into<String>) -> ProgressBar {
        let pb = self.add(ProgressBar::new_spinner());
        pb.set_style(ProgressStyleTemplate::stage());
        pb.set_prefix(stage.to_string());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

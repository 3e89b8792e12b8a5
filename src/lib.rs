//! Collects the public GitHub activity of one user into the JSON document
//! rendered by `index.html`.

pub mod analyze;
pub mod collector;
pub mod config;
pub mod error;
pub mod github;
pub mod model;
pub mod report;
mod utils;

pub use analyze::AnalyticsDocument;
pub use collector::{CollectOptions, Collector};
pub use config::{Args, Config};
pub use error::{Error, Result};
pub use github::Client;

use indicatif::MultiProgress;
use report::JsonReport;
use std::path::PathBuf;

/// Fetches, aggregates and saves. Nothing is written unless every step succeeded.
pub async fn run(config: &Config, progress: MultiProgress) -> Result<PathBuf> {
    let client = Client::new(&config.api_url, config.token.clone())?;
    let collector = Collector::new(client, config.options.clone()).with_progress(progress);
    let document = collector.fetch(&config.username).await?;
    document.report_save(&config.output)?;
    Ok(config.output.clone())
}

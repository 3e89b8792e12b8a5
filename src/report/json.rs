use crate::analyze::AnalyticsDocument;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "report";

/// Where the dashboard page expects the document, relative to the repository root.
pub const DEFAULT_OUTPUT_PATH: &str = "data/analytics.json";

pub trait JsonReport {
    fn report_render(&self) -> Result<String>;

    /// Replaces the document at `path`. The new content is written to a
    /// sibling file first and renamed over the target, so a failure leaves
    /// the previous document in place.
    fn report_save(&self, path: &Path) -> Result<()>;
}

impl JsonReport for AnalyticsDocument {
    fn report_render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(Error::Render)?;
        json.push('\n');
        Ok(json)
    }

    fn report_save(&self, path: &Path) -> Result<()> {
        let json = self.report_render()?;
        let persist_error = |source| Error::Persist {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persist_error)?;
        }

        let staging = staging_path(path);
        if let Err(source) = fs::write(&staging, json).and_then(|_| fs::rename(&staging, path)) {
            let _ = fs::remove_file(&staging);
            return Err(persist_error(source));
        }

        log::info!(target: LOG_TARGET, "Saved analytics document to {}", path.display());
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("analytics.json"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

use crate::analyze::{AnalyticsDocument, Analyzer, DataAnalysis};
use crate::error::{Error, Result};
use crate::github::{Client, PageProgress};
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use chrono::{DateTime, Utc};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

const LOG_TARGET: &str = "collector";

pub const DEFAULT_MAX_REPO_PAGES: u32 = 10;
const MAX_USERNAME_LEN: usize = 39;

#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Ceiling on repository pages (100 repositories each).
    pub max_repo_pages: u32,
    /// Probe each repository's contents; costs four requests per repository.
    pub repo_health: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            max_repo_pages: DEFAULT_MAX_REPO_PAGES,
            repo_health: false,
        }
    }
}

/// Fetches one user's public activity and turns it into an [`AnalyticsDocument`].
pub struct Collector {
    client: Client,
    options: CollectOptions,
    progress: MultiProgress,
}

impl Collector {
    pub fn new(client: Client, options: CollectOptions) -> Self {
        Self {
            client,
            options,
            progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }

    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.progress = progress;
        self
    }

    pub async fn fetch(&self, username: &str) -> Result<AnalyticsDocument> {
        self.fetch_as_of(username, Utc::now()).await
    }

    pub async fn fetch_as_of(
        &self,
        username: &str,
        as_of: DateTime<Utc>,
    ) -> Result<AnalyticsDocument> {
        let username = validate_username(username)?;
        if self.options.max_repo_pages == 0 {
            return Err(Error::InvalidInput(
                "at least one repository page must be fetched".into(),
            ));
        }
        log::info!(
            target: LOG_TARGET,
            "Collecting activity of '{username}' ({})",
            if self.client.is_authenticated() { "authenticated" } else { "anonymous" }
        );

        let profile_pb = self.progress.add_stage("profile", "Fetch user profile ...");
        let profile = self
            .client
            .fetch_profile(username)
            .await
            .inspect_err(|_| profile_pb.abandon())?;
        finish(&profile_pb, format!("✅ Completed fetch profile of `{}`", profile.username));

        let repos_pb = self.progress.add_stage("repositories", "Waiting GitHub");
        let events_pb = self.progress.add_stage("events", "Waiting GitHub");
        let (repositories, events) = futures::try_join!(
            self.client.fetch_repositories(
                username,
                self.options.max_repo_pages,
                page_progress(&repos_pb, "repositories"),
            ),
            self.client.fetch_events(username, page_progress(&events_pb, "events")),
        )
        .inspect_err(|_| {
            repos_pb.abandon();
            events_pb.abandon();
        })?;
        finish(
            &repos_pb,
            format!("✅ Completed fetch repositories (find {} repositories)", repositories.len()),
        );
        finish(
            &events_pb,
            format!("✅ Completed fetch events (find {} events)", events.len()),
        );

        let mut data_analysis = DataAnalysis::new(profile);
        data_analysis.insert_repositories(repositories);
        data_analysis.insert_events(events);

        if self.options.repo_health {
            let health_pb = self.progress.add_stage("health", "Probe repositories ...");
            let total = data_analysis.repositories.len();
            let progress_pb = health_pb.clone();
            let progress = Box::new(move |index: u32| {
                progress_pb.set_message(format!("Probe repository {index}/{total} ..."));
            });
            let health = self
                .client
                .probe_health(&data_analysis.repositories, progress)
                .await
                .inspect_err(|_| health_pb.abandon())?;
            finish(&health_pb, format!("✅ Completed probe of {total} repositories"));
            data_analysis.insert_health(health);
        }

        let document = data_analysis.analyze(as_of);
        log::debug!(
            target: LOG_TARGET,
            "Aggregated {} languages, {} event types",
            document.languages.len(),
            document.activity_types.len()
        );
        Ok(document)
    }
}

/// Trims `username` and checks it is a plausible GitHub login.
pub fn validate_username(username: &str) -> Result<&str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::InvalidInput("username must not be empty".into()));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(Error::InvalidInput(format!(
            "username '{username}' is longer than {MAX_USERNAME_LEN} characters"
        )));
    }
    if username.starts_with('-')
        || username.ends_with('-')
        || username.contains("--")
        || !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(Error::InvalidInput(format!(
            "username '{username}' may only contain letters, digits and single inner hyphens"
        )));
    }
    Ok(username)
}

fn page_progress<'a>(pb: &ProgressBar, what: &'static str) -> PageProgress<'a> {
    let pb = pb.clone();
    Box::new(move |page| pb.set_message(format!("Fetch {what} (#{page} page) ...")))
}

fn finish(pb: &ProgressBar, message: String) {
    pb.set_style(ProgressStyleTemplate::done());
    pb.finish_with_message(message);
}

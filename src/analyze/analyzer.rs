use crate::analyze::model::Histogram;
use crate::analyze::{
    AnalyticsDocument, DataAnalysis, HireabilityBreakdown, PullRequestStats, RepoHealth,
    RepoStats, TopRepository,
};
use crate::model::{EventKind, EventRecord, RepositoryHealth, RepositoryRecord};
use chrono::{DateTime, Datelike, Months, NaiveDate, Timelike, Utc};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::BTreeMap;

pub const TOP_REPOSITORIES: usize = 5;
pub const MONTHLY_WINDOW: u32 = 12;

pub trait Analyzer {
    /// Aggregates the fetched data. `as_of` only anchors the zero-filled
    /// monthly window, so equal inputs within a month give equal documents.
    fn analyze(&self, as_of: DateTime<Utc>) -> AnalyticsDocument;
}

impl Analyzer for DataAnalysis {
    fn analyze(&self, as_of: DateTime<Utc>) -> AnalyticsDocument {
        let (commit_hours, commit_weekdays) = commit_histograms(&self.events);
        let repo_stats = repo_stats(&self.repositories, TOP_REPOSITORIES);
        let monthly_commits = monthly_commits(&self.events, as_of, MONTHLY_WINDOW);
        let monthly_commits_avg = average(&monthly_commits);
        let pr_stats = pull_request_stats(&self.events);
        let repo_health = self
            .health
            .as_ref()
            .map(|health| repo_health(&self.repositories, health));

        let hireability_breakdown = HireabilityBreakdown {
            public_repos: self.profile.public_repos,
            stars: repo_stats.total_stars,
            followers: self.profile.followers,
            consistency: monthly_commits_avg,
            collaboration: round1(pr_stats.merge_rate.unwrap_or(0.0) * 100.0),
        };

        AnalyticsDocument {
            user: self.profile.clone(),
            languages: language_distribution(&self.repositories),
            commit_hours,
            commit_weekdays,
            activity_types: activity_types(&self.events),
            repo_stats,
            monthly_commits,
            monthly_commits_avg,
            pr_stats,
            repo_health,
            hireability_breakdown,
        }
    }
}

trait EventsExtension {
    fn of_kind<'a>(&'a self, kind: EventKind) -> impl Iterator<Item = &'a EventRecord>;
}

impl EventsExtension for [EventRecord] {
    fn of_kind<'a>(&'a self, kind: EventKind) -> impl Iterator<Item = &'a EventRecord> {
        self.iter().filter(move |event| event.kind == kind)
    }
}

/// Repositories per primary language; repositories without one are skipped.
pub fn language_distribution(repositories: &[RepositoryRecord]) -> IndexMap<String, u64> {
    ranked_counts(
        repositories
            .iter()
            .filter_map(|repository| repository.language.as_deref()),
    )
}

pub fn activity_types(events: &[EventRecord]) -> IndexMap<String, u64> {
    ranked_counts(events.iter().map(|event| event.kind.as_str()))
}

/// Tallies names, largest count first and ties by name.
fn ranked_counts<'a>(names: impl Iterator<Item = &'a str>) -> IndexMap<String, u64> {
    names
        .counts()
        .into_iter()
        .sorted_by(|(name, count), (other_name, other_count)| {
            other_count.cmp(count).then_with(|| name.cmp(other_name))
        })
        .map(|(name, count)| (name.to_string(), count as u64))
        .collect()
}

pub fn commit_histograms(events: &[EventRecord]) -> (Histogram<24>, Histogram<7>) {
    let mut hours = [0; 24];
    let mut weekdays = [0; 7];
    for event in events.of_kind(EventKind::Push) {
        hours[event.created_at.hour() as usize] += 1;
        weekdays[event.created_at.weekday().num_days_from_monday() as usize] += 1;
    }
    (hours, weekdays)
}

pub fn top_repositories(repositories: &[RepositoryRecord], count: usize) -> Vec<TopRepository> {
    repositories
        .iter()
        .sorted_by(|a, b| b.stars.cmp(&a.stars).then_with(|| a.name.cmp(&b.name)))
        .take(count)
        .map(TopRepository::from)
        .collect()
}

pub fn repo_stats(repositories: &[RepositoryRecord], top: usize) -> RepoStats {
    RepoStats {
        total_stars: repositories.iter().map(|repository| repository.stars).sum(),
        total_forks: repositories.iter().map(|repository| repository.forks).sum(),
        total_repos: repositories.len(),
        top_repos: top_repositories(repositories, top),
    }
}

/// Commits pushed per `YYYY-MM`. A push whose payload lists no commits
/// counts as one. The `months` calendar months ending at `as_of` are
/// always present, zero when idle.
pub fn monthly_commits(
    events: &[EventRecord],
    as_of: DateTime<Utc>,
    months: u32,
) -> IndexMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for event in events.of_kind(EventKind::Push) {
        let commits = event.push.as_ref().map_or(0, |push| push.commits).max(1);
        *counts
            .entry(month_key(event.created_at.date_naive()))
            .or_default() += commits as u64;
    }

    let current_month = as_of.date_naive().with_day(1);
    for offset in 0..months {
        if let Some(month) = current_month.and_then(|month| month.checked_sub_months(Months::new(offset))) {
            counts.entry(month_key(month)).or_default();
        }
    }
    counts.into_iter().collect()
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn pull_request_stats(events: &[EventRecord]) -> PullRequestStats {
    let mut total_prs = 0;
    let mut merged_prs = 0;
    let mut merge_hours = vec![];

    for event in events.of_kind(EventKind::PullRequest) {
        total_prs += 1;
        let Some(pull_request) = &event.pull_request else {
            continue;
        };
        if pull_request.action.as_deref() == Some("closed") && pull_request.merged {
            merged_prs += 1;
            if let (Some(created_at), Some(closed_at)) = (pull_request.created_at, pull_request.closed_at) {
                merge_hours.push((closed_at - created_at).num_seconds() as f64 / 3600.0);
            }
        }
    }

    PullRequestStats {
        total_prs,
        merged_prs,
        merge_rate: (total_prs > 0).then(|| merged_prs as f64 / total_prs as f64),
        avg_time_to_merge_hours: (!merge_hours.is_empty())
            .then(|| round1(merge_hours.iter().sum::<f64>() / merge_hours.len() as f64)),
    }
}

pub fn repo_health(repositories: &[RepositoryRecord], health: &[RepositoryHealth]) -> RepoHealth {
    RepoHealth {
        has_readme: health.iter().filter(|probe| probe.has_readme).count(),
        has_ci: health.iter().filter(|probe| probe.has_ci).count(),
        has_tests: health.iter().filter(|probe| probe.has_tests).count(),
        has_license: repositories
            .iter()
            .filter(|repository| repository.license.is_some())
            .count(),
        total_repos_checked: health.len(),
    }
}

fn average(values: &IndexMap<String, u64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round1(values.values().sum::<u64>() as f64 / values.len() as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

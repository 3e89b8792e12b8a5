use crate::model::{EventRecord, ProfileSummary, RepositoryHealth, RepositoryRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything fetched during one run, before aggregation.
#[derive(Debug, Clone)]
pub struct DataAnalysis {
    pub profile: ProfileSummary,
    pub repositories: Vec<RepositoryRecord>,
    pub events: Vec<EventRecord>,
    pub health: Option<Vec<RepositoryHealth>>,
}

impl DataAnalysis {
    pub fn new(profile: ProfileSummary) -> Self {
        Self {
            profile,
            repositories: vec![],
            events: vec![],
            health: None,
        }
    }

    pub fn insert_repositories(&mut self, repositories: Vec<RepositoryRecord>) {
        self.repositories = repositories;
    }

    pub fn insert_events(&mut self, events: Vec<EventRecord>) {
        self.events = events;
    }

    pub fn insert_health(&mut self, health: Vec<RepositoryHealth>) {
        self.health = Some(health);
    }
}

pub type Histogram<const N: usize> = [u64; N];

/// The persisted artifact read by the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDocument {
    pub user: ProfileSummary,
    pub languages: IndexMap<String, u64>,
    /// Push events per UTC hour of day.
    pub commit_hours: Histogram<24>,
    /// Push events per UTC weekday, Monday first.
    pub commit_weekdays: Histogram<7>,
    pub activity_types: IndexMap<String, u64>,
    pub repo_stats: RepoStats,
    pub monthly_commits: IndexMap<String, u64>,
    pub monthly_commits_avg: f64,
    pub pr_stats: PullRequestStats,
    pub repo_health: Option<RepoHealth>,
    pub hireability_breakdown: HireabilityBreakdown,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RepoStats {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_repos: usize,
    pub top_repos: Vec<TopRepository>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopRepository {
    pub name: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
}

impl From<&RepositoryRecord> for TopRepository {
    fn from(repository: &RepositoryRecord) -> Self {
        Self {
            name: repository.name.clone(),
            stars: repository.stars,
            forks: repository.forks,
            language: repository.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestStats {
    pub total_prs: usize,
    pub merged_prs: usize,
    pub merge_rate: Option<f64>,
    pub avg_time_to_merge_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RepoHealth {
    pub has_readme: usize,
    pub has_ci: usize,
    pub has_tests: usize,
    pub has_license: usize,
    pub total_repos_checked: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HireabilityBreakdown {
    pub public_repos: u64,
    pub stars: u64,
    pub followers: u64,
    pub consistency: f64,
    pub collaboration: f64,
}

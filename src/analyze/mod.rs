pub mod analyzer;
pub mod model;

pub use analyzer::{Analyzer, MONTHLY_WINDOW, TOP_REPOSITORIES};
pub use model::{
    AnalyticsDocument, DataAnalysis, HireabilityBreakdown, PullRequestStats, RepoHealth,
    RepoStats, TopRepository,
};

//! Wire shapes of the GitHub REST resources the collector reads.

use crate::model::{ProfileSummary, RepositoryRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
}

impl From<UserResponse> for ProfileSummary {
    fn from(user: UserResponse) -> Self {
        ProfileSummary::new(
            user.login,
            user.name,
            user.bio,
            user.public_repos,
            user.followers,
            user.following,
            user.created_at,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerResponse {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LicenseResponse {
    pub spdx_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoResponse {
    pub name: String,
    pub owner: OwnerResponse,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub size: u64,
    pub license: Option<LicenseResponse>,
}

impl From<RepoResponse> for RepositoryRecord {
    fn from(repo: RepoResponse) -> Self {
        let license = repo
            .license
            .and_then(|license| license.spdx_id.or(license.name));
        RepositoryRecord::new(
            repo.name,
            repo.owner.login,
            repo.language.as_deref(),
            repo.stargazers_count,
            repo.forks_count,
            repo.size,
            license.as_deref(),
        )
    }
}

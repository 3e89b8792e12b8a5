use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the `/users/{username}` resource taken once per run.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
}

// Create
impl ProfileSummary {
    pub fn new(
        username: impl ToString,
        name: Option<String>,
        bio: Option<String>,
        public_repos: u64,
        followers: u64,
        following: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.to_string(),
            name,
            bio,
            public_repos,
            followers,
            following,
            created_at,
        }
    }
}

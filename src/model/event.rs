use chrono::{DateTime, Utc};
use serde_json::Value;

/// Type of a public GitHub event, as reported in its `type` field.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum EventKind {
    Push,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Issues,
    IssueComment,
    Create,
    Delete,
    Fork,
    Watch,
    Release,
    Public,
    Member,
    Gollum,
    CommitComment,
    Other(String),
}

impl EventKind {
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "PushEvent" => Self::Push,
            "PullRequestEvent" => Self::PullRequest,
            "PullRequestReviewEvent" => Self::PullRequestReview,
            "PullRequestReviewCommentEvent" => Self::PullRequestReviewComment,
            "IssuesEvent" => Self::Issues,
            "IssueCommentEvent" => Self::IssueComment,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "ForkEvent" => Self::Fork,
            "WatchEvent" => Self::Watch,
            "ReleaseEvent" => Self::Release,
            "PublicEvent" => Self::Public,
            "MemberEvent" => Self::Member,
            "GollumEvent" => Self::Gollum,
            "CommitCommentEvent" => Self::CommitComment,
            other => Self::Other(other.to_string()),
        }
    }

    /// The type string GitHub uses for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "PushEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::PullRequestReview => "PullRequestReviewEvent",
            Self::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            Self::Issues => "IssuesEvent",
            Self::IssueComment => "IssueCommentEvent",
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
            Self::Fork => "ForkEvent",
            Self::Watch => "WatchEvent",
            Self::Release => "ReleaseEvent",
            Self::Public => "PublicEvent",
            Self::Member => "MemberEvent",
            Self::Gollum => "GollumEvent",
            Self::CommitComment => "CommitCommentEvent",
            Self::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PushDetails {
    pub commits: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PullRequestDetails {
    pub action: Option<String>,
    pub merged: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EventRecord {
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
    pub repo: String,
    pub push: Option<PushDetails>,
    pub pull_request: Option<PullRequestDetails>,
}

// Create
impl EventRecord {
    pub fn new(kind: EventKind, created_at: DateTime<Utc>, repo: impl ToString) -> Self {
        Self {
            kind,
            created_at,
            repo: repo.to_string(),
            push: None,
            pull_request: None,
        }
    }

    pub fn with_push(mut self, commits: usize) -> Self {
        self.push = Some(PushDetails { commits });
        self
    }

    pub fn with_pull_request(mut self, details: PullRequestDetails) -> Self {
        self.pull_request = Some(details);
        self
    }

    pub(crate) fn is_push(&self) -> bool {
        self.kind == EventKind::Push
    }
}

// Parser
impl EventRecord {
    /// Builds a record from one element of the `/users/{username}/events` array.
    ///
    /// Only `type`, `created_at` and `repo.name` are required; payload fields
    /// GitHub omits for trimmed events are treated as absent.
    pub fn parse(details: &Value) -> Result<Self, String> {
        let Some(event_type) = details["type"].as_str() else {
            return Err("Not found 'type' field".into());
        };
        let Some(created_at) = details["created_at"].as_str() else {
            return Err("Not found 'created_at' field".into());
        };
        let created_at = parse_timestamp(created_at)?;
        let Some(repo) = details["repo"]["name"].as_str() else {
            return Err("Not found 'repo.name' field".into());
        };

        let kind = EventKind::from_type(event_type);
        let payload = &details["payload"];
        let record = Self::new(kind.clone(), created_at, repo);
        let record = match kind {
            EventKind::Push => {
                let commits = match payload["commits"].as_array() {
                    Some(commits) => commits.len(),
                    None => payload["size"].as_u64().unwrap_or(0) as usize,
                };
                record.with_push(commits)
            }
            EventKind::PullRequest => {
                let pull_request = &payload["pull_request"];
                let details = PullRequestDetails {
                    action: payload["action"].as_str().map(String::from),
                    merged: pull_request["merged"].as_bool().unwrap_or(false),
                    created_at: optional_timestamp(&pull_request["created_at"])?,
                    closed_at: optional_timestamp(&pull_request["closed_at"])?,
                };
                record.with_pull_request(details)
            }
            _ => record,
        };
        Ok(record)
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(|_| format!("Not a valid date time: {value}"))
}

fn optional_timestamp(value: &Value) -> Result<Option<DateTime<Utc>>, String> {
    match value.as_str() {
        Some(value) => parse_timestamp(value).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_push_event_with_commits() {
        let value = json!({
            "type": "PushEvent",
            "created_at": "2024-05-04T23:10:00Z",
            "repo": { "name": "octocat/hello" },
            "payload": { "size": 5, "commits": [{ "sha": "a" }, { "sha": "b" }] }
        });
        let event = EventRecord::parse(&value).unwrap();
        assert_eq!(event.kind, EventKind::Push);
        assert_eq!(event.repo, "octocat/hello");
        assert_eq!(
            event.created_at,
            Utc.with_ymd_and_hms(2024, 5, 4, 23, 10, 0).unwrap()
        );
        assert_eq!(event.push, Some(PushDetails { commits: 2 }));
    }

    #[test]
    fn push_without_commit_list_falls_back_to_size() {
        let value = json!({
            "type": "PushEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "repo": { "name": "octocat/hello" },
            "payload": { "size": 3 }
        });
        let event = EventRecord::parse(&value).unwrap();
        assert_eq!(event.push, Some(PushDetails { commits: 3 }));
    }

    #[test]
    fn parses_merged_pull_request() {
        let value = json!({
            "type": "PullRequestEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "repo": { "name": "octocat/hello" },
            "payload": {
                "action": "closed",
                "pull_request": {
                    "merged": true,
                    "created_at": "2024-05-03T10:00:00Z",
                    "closed_at": "2024-05-04T10:00:00Z"
                }
            }
        });
        let event = EventRecord::parse(&value).unwrap();
        let pull_request = event.pull_request.unwrap();
        assert_eq!(pull_request.action.as_deref(), Some("closed"));
        assert!(pull_request.merged);
        assert!(pull_request.created_at.is_some());
        assert!(pull_request.closed_at.is_some());
    }

    #[test]
    fn unknown_type_is_kept_verbatim() {
        let value = json!({
            "type": "SponsorshipEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "repo": { "name": "octocat/hello" },
            "payload": {}
        });
        let event = EventRecord::parse(&value).unwrap();
        assert_eq!(event.kind, EventKind::Other("SponsorshipEvent".into()));
        assert_eq!(event.kind.as_str(), "SponsorshipEvent");
    }

    #[test]
    fn missing_type_is_rejected() {
        let value = json!({ "created_at": "2024-05-04T10:00:00Z", "repo": { "name": "a/b" } });
        assert_eq!(
            EventRecord::parse(&value).unwrap_err(),
            "Not found 'type' field"
        );
    }

    #[test]
    fn invalid_timestamp_is_rejected() {
        let value = json!({
            "type": "WatchEvent",
            "created_at": "yesterday",
            "repo": { "name": "a/b" }
        });
        assert!(EventRecord::parse(&value)
            .unwrap_err()
            .contains("Not a valid date time"));
    }

    #[test]
    fn kind_round_trips_through_type_string() {
        for name in ["PushEvent", "IssuesEvent", "ForkEvent", "GollumEvent"] {
            assert_eq!(EventKind::from_type(name).as_str(), name);
        }
    }
}

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found: GitHub has no user named '{0}'")]
    UserNotFound(String),

    #[error("Rate limited: {}", rate_limit_hint(.reset_at, .authenticated))]
    RateLimited {
        reset_at: Option<DateTime<Utc>>,
        authenticated: bool,
    },

    #[error("Network error while requesting {url}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("Failed to serialize the analytics document")]
    Render(#[source] serde_json::Error),

    #[error("Failed to write {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn rate_limit_hint(reset_at: &Option<DateTime<Utc>>, authenticated: &bool) -> String {
    let wait = match reset_at {
        Some(reset_at) => format!(
            "wait until {} for the limit to reset",
            reset_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => "wait up to an hour for the limit to reset".to_string(),
    };
    if *authenticated {
        format!("GitHub API rate limit exceeded for this token; {wait}")
    } else {
        format!(
            "GitHub API rate limit exceeded (60 requests/hour without a token); \
             {wait} or supply a personal access token (5000 requests/hour)"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rate_limited_without_token_suggests_token() {
        let error = Error::RateLimited {
            reset_at: None,
            authenticated: false,
        };
        let message = error.to_string();
        assert!(message.starts_with("Rate limited"));
        assert!(message.contains("personal access token"));
        assert!(message.contains("wait"));
    }

    #[test]
    fn rate_limited_mentions_reset_time() {
        let reset_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let error = Error::RateLimited {
            reset_at: Some(reset_at),
            authenticated: true,
        };
        let message = error.to_string();
        assert!(message.contains("2024-03-01 12:30:00 UTC"));
        assert!(!message.contains("personal access token"));
    }

    #[test]
    fn render_failure_describes_the_document() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Render(source);
        assert_eq!(error.to_string(), "Failed to serialize the analytics document");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn user_not_found_names_the_user() {
        let message = Error::UserNotFound("octocat".into()).to_string();
        assert_eq!(
            message,
            "User not found: GitHub has no user named 'octocat'"
        );
    }
}

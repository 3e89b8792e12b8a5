use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) const LOG_TARGET: &str = "github";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub(crate) const PER_PAGE: usize = 100;

const USER_AGENT: &str = concat!("github-analytics/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type PageProgress<'a> = Box<dyn FnMut(u32) + Send + 'a>;

/// Read-only client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

// Create
impl Client {
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| Error::NetworkError {
                url: api_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

// Transport
impl Client {
    /// Issues a GET and returns the response whatever its status.
    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.api_url, path);
        log::debug!(target: LOG_TARGET, "GET {url} {query:?}");

        let mut request = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|source| Error::NetworkError { url, source })?;

        log::debug!(target: LOG_TARGET, "{} -> {}", response.url(), response.status());
        Ok(response)
    }

    /// Fails on rate limiting and any non-success status.
    pub(crate) fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let reset_at = rate_limit_reset(&response);
            log::warn!(
                target: LOG_TARGET,
                "Rate limited on {} (status {status}, reset {reset_at:?})",
                response.url()
            );
            return Err(Error::RateLimited {
                reset_at,
                authenticated: self.is_authenticated(),
            });
        }
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                url: response.url().to_string(),
                status,
            });
        }
        Ok(response)
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = self.check_status(response)?;
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|source| Error::NetworkError {
                url: url.clone(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|error| Error::MalformedResponse {
            url,
            message: error.to_string(),
        })
    }
}

pub(crate) fn page_query(page: u32) -> [(&'static str, String); 2] {
    [("per_page", PER_PAGE.to_string()), ("page", page.to_string())]
}

fn rate_limit_reset(response: &Response) -> Option<DateTime<Utc>> {
    let reset = response.headers().get("x-ratelimit-reset")?.to_str().ok()?;
    let seconds = reset.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}

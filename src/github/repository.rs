use super::client::{page_query, Client, PageProgress, LOG_TARGET, PER_PAGE};
use super::schema::RepoResponse;
use crate::error::{Error, Result};
use crate::model::RepositoryRecord;
use reqwest::StatusCode;

impl Client {
    /// Lists the public repositories of `username`, following pagination
    /// until a short page or `max_pages` pages.
    pub async fn fetch_repositories<'a>(
        &self,
        username: &str,
        max_pages: u32,
        mut cb: PageProgress<'a>,
    ) -> Result<Vec<RepositoryRecord>> {
        let path = format!("/users/{username}/repos");
        let mut repositories = vec![];

        for page in 1..=max_pages {
            cb(page);
            let response = self.get(&path, &page_query(page)).await?;
            if response.status() == StatusCode::NOT_FOUND {
                return Err(Error::UserNotFound(username.to_string()));
            }
            let batch: Vec<RepoResponse> = self.read_json(response).await?;
            let batch_len = batch.len();
            repositories.extend(batch.into_iter().map(RepositoryRecord::from));
            if batch_len < PER_PAGE {
                return Ok(repositories);
            }
        }

        log::warn!(
            target: LOG_TARGET,
            "Stopped listing repositories of '{username}' after {max_pages} pages ({} repositories)",
            repositories.len()
        );
        Ok(repositories)
    }
}

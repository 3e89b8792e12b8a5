use super::client::Client;
use super::schema::UserResponse;
use crate::error::{Error, Result};
use crate::model::ProfileSummary;
use reqwest::StatusCode;

impl Client {
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileSummary> {
        let response = self.get(&format!("/users/{username}"), &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        let user: UserResponse = self.read_json(response).await?;
        Ok(user.into())
    }
}

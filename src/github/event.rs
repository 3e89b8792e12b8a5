use super::client::{page_query, Client, PageProgress, LOG_TARGET, PER_PAGE};
use crate::error::{Error, Result};
use crate::model::EventRecord;
use reqwest::StatusCode;
use serde_json::Value;

impl Client {
    /// Lists the recent public events of `username`. GitHub keeps a bounded
    /// window of events and answers 422 once paging runs past it.
    pub async fn fetch_events<'a>(
        &self,
        username: &str,
        mut cb: PageProgress<'a>,
    ) -> Result<Vec<EventRecord>> {
        let path = format!("/users/{username}/events");
        let mut events = vec![];
        let mut page = 1;

        loop {
            cb(page);
            let response = self.get(&path, &page_query(page)).await?;
            match response.status() {
                StatusCode::NOT_FOUND => return Err(Error::UserNotFound(username.to_string())),
                StatusCode::UNPROCESSABLE_ENTITY => {
                    log::debug!(target: LOG_TARGET, "Event window exhausted at page {page}");
                    break;
                }
                _ => {}
            }
            let url = response.url().to_string();
            let batch: Vec<Value> = self.read_json(response).await?;
            for details in &batch {
                let event = EventRecord::parse(details).map_err(|message| {
                    Error::MalformedResponse {
                        url: url.clone(),
                        message,
                    }
                })?;
                events.push(event);
            }
            if batch.len() < PER_PAGE {
                break;
            }
            page += 1;
        }
        Ok(events)
    }
}

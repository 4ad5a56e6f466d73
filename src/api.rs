use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::errors::WatchError;

pub struct StatusClient {
    http: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl StatusClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        }
    }

    pub async fn fetch(&self, timestamp: i64) -> Result<Value, WatchError> {
        tracing::debug!(from_date = timestamp, "Requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.api_token))
            .query(&[("from_date", timestamp)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WatchError::InvalidRequest(status.as_u16()));
        }

        let body = response.json::<Value>().await?;
        tracing::debug!("Homework statuses received");
        Ok(body)
    }
}

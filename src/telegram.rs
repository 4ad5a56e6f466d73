use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    pub async fn notify(&self, text: &str) {
        tracing::debug!("Sending notification");
        match self.send_message(text).await {
            Ok(()) => tracing::debug!("Notification delivered"),
            Err(err) => tracing::error!(error = %err, "Failed to deliver notification"),
        }
    }

    async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_URL, self.bot_token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Telegram request failed")?;

        let status = response.status();
        let body: SendMessageResponse = response
            .json()
            .await
            .context("Telegram response parse failed")?;

        if !body.ok {
            return Err(anyhow!(
                "Telegram API error: {} - {}",
                status,
                body.description.unwrap_or_default()
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

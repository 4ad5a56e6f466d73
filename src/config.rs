use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Clone)]
pub struct Config {
    pub api_token: String,
    pub bot_token: String,
    pub chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_token =
            env::var("API_TOKEN").context("API_TOKEN environment variable is required")?;

        let bot_token =
            env::var("BOT_TOKEN").context("BOT_TOKEN environment variable is required")?;

        let chat_id = env::var("CHAT_ID").context("CHAT_ID environment variable is required")?;

        let endpoint = env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = parse_poll_interval(env::var("POLL_INTERVAL").ok());

        Ok(Config {
            api_token,
            bot_token,
            chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn parse_poll_interval(value: Option<String>) -> Duration {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS))
}

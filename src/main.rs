mod api;
mod config;
mod errors;
mod logger;
mod report;
mod status;
mod telegram;

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::api::StatusClient;
use crate::config::Config;
use crate::errors::WatchError;
use crate::report::{Report, ReportTracker};
use crate::status::HomeworkRecord;
use crate::telegram::TelegramNotifier;

const NO_NEW_WORK: &str = "Новых работ нет";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Required configuration is missing, shutting down");
            return Err(err);
        }
    };

    tracing::info!(
        endpoint = config.endpoint.as_str(),
        poll_interval_secs = config.poll_interval.as_secs(),
        "Starting homework status watcher"
    );

    let client = StatusClient::new(&config);
    let notifier = TelegramNotifier::new(&config);

    notifier.notify("Старт").await;

    let mut tracker = ReportTracker::new();
    let mut timestamp: i64 = 0;
    let mut interval = tokio::time::interval(config.poll_interval);

    loop {
        interval.tick().await;

        let report = match poll_once(&client, &mut timestamp).await {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(error = %err, "Poll cycle failed");
                Report::new(
                    tracker.current().subject.clone(),
                    format!("Сбой в работе программы: {err}"),
                )
            }
        };

        if tracker.update(report) {
            notifier.notify(&tracker.current().message).await;
        } else {
            tracing::debug!("Review status unchanged");
        }
    }
}

async fn poll_once(client: &StatusClient, timestamp: &mut i64) -> Result<Report, WatchError> {
    let requested_at = Utc::now().timestamp();

    let response = client.fetch(*timestamp).await?;
    let homeworks = status::check_response(&response)?;

    let report = match homeworks.first() {
        Some(homework) => {
            let record = HomeworkRecord::from_value(homework)?;
            let message = record.status_line();
            tracing::info!(homework = record.name.as_str(), "Review status received");
            Report::new(record.name, message)
        }
        None => {
            tracing::info!("No homework under review");
            Report::new("", NO_NEW_WORK)
        }
    };

    if let Some(current_date) = response.get("current_date").and_then(Value::as_i64) {
        tracing::debug!(current_date, "Upstream reported its own cursor");
    }
    *timestamp = requested_at;

    Ok(report)
}

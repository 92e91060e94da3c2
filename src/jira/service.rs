use colored::Colorize;
use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};

use super::structs::{WorklogEntry, WorklogRequest};
use crate::config::Config;

/// Creates one work log on the entry's issue. Returns true only when Jira
/// answers 201 Created; every other status is logged with the raw body and
/// reported as false. Transport errors bubble up to the driver.
pub async fn add_worklog(
    client: &Client,
    config: &Config,
    entry: &WorklogEntry,
) -> anyhow::Result<bool> {
    let url = format!(
        "{}/rest/api/3/issue/{}/worklog",
        config.jira_server, entry.issue_key
    );
    let response = client
        .request(Method::POST, url)
        .header(CONTENT_TYPE, "application/json")
        .basic_auth(&config.jira_user, Some(&config.jira_api_token))
        .json(&WorklogRequest::from_entry(entry))
        .send()
        .await?;

    if response.status() == StatusCode::CREATED {
        println!(
            "{} work log added ({} starting {})",
            entry.issue_key.green(),
            humantime::format_duration(std::time::Duration::from_secs(
                entry.time_spent_seconds as u64
            )),
            entry.started
        );
        Ok(true)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        println!(
            "{} failed to create work log ({}): {}",
            entry.issue_key.red(),
            status,
            body
        );
        Ok(false)
    }
}

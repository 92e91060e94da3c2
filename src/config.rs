use std::env;

use anyhow::Context;
use chrono_tz::Tz;

const DEFAULT_TZ: &str = "America/New_York";

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub jira_server: String,
    pub jira_user: String,
    pub jira_api_token: String,
    pub csv_file_path: String,
    /// Zone the timesheet's civil times are written in. Fixed for the whole
    /// run, never per-row.
    pub local_tz: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let local_tz = match env::var("LOCAL_TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|err| anyhow::anyhow!("LOCAL_TIMEZONE is not a valid zone: {err}"))?,
            Err(_) => DEFAULT_TZ.parse::<Tz>().expect("default zone is valid"),
        };

        Ok(Config {
            jira_server: require("JIRA_SERVER")?,
            jira_user: require("JIRA_USER")?,
            jira_api_token: require("JIRA_API_TOKEN")?,
            csv_file_path: require("CSV_FILE_PATH")?,
            local_tz,
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

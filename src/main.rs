use clap::Parser;
use worklog_sync::{config::Config, sync::sync_sheet};

/// Reads the timesheet named by CSV_FILE_PATH and posts every unlogged row to
/// Jira as work logs. Configuration comes from the environment (or a .env
/// file): JIRA_SERVER, JIRA_USER, JIRA_API_TOKEN, CSV_FILE_PATH and
/// optionally LOCAL_TIMEZONE.
#[derive(Parser, Debug)]
#[command(version, about = "Sync a timesheet CSV to Jira work logs", long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    sync_sheet(&config).await
}

use std::{future::Future, time::Duration};

use colored::Colorize;
use humantime::format_duration;
use reqwest::Client;

use crate::{
    config::Config,
    errors::SyncError,
    jira::{self, structs::WorklogEntry},
    sheet::{self, structs::Row},
    times,
};

/// Separator between ranges inside one row's `Times` cell.
const RANGE_DELIMITER: &str = "---";

/// Whole-run entry point: load the sheet, push every unlogged row to Jira,
/// write the sheet back. A failing save is logged and swallowed so the run
/// still reports what it managed to submit.
pub async fn sync_sheet(config: &Config) -> anyhow::Result<()> {
    let mut rows = sheet::service::load_rows(&config.csv_file_path)?;
    println!(
        "Loaded {} rows from {}",
        rows.len().to_string().blue(),
        config.csv_file_path
    );

    let client = Client::new();
    let client_ref = &client;
    let total_seconds = process_rows(&mut rows, config, move |entry| async move {
        jira::service::add_worklog(client_ref, config, &entry).await
    })
    .await;

    println!(
        "Logged a total duration of {}",
        format_duration(Duration::from_secs(total_seconds))
            .to_string()
            .blue()
            .underline()
    );

    if let Err(err) = sheet::service::save_rows(&config.csv_file_path, &rows) {
        println!(
            "Failed to save timesheet {}: {}",
            config.csv_file_path.red(),
            err
        );
    } else {
        println!("Work log processing completed and timesheet saved.");
    }
    Ok(())
}

/// Runs the per-row loop against an injected submit callback and returns the
/// number of seconds successfully logged.
///
/// Every range of a row is tried independently; a failure in any of them
/// (unparseable range, unresolvable local time, rejected or unreachable
/// submission) leaves the whole row unlogged so the next run retries it.
/// Ranges of that row which already reached Jira will then be created a
/// second time; deduplicating them is deliberately out of scope.
pub async fn process_rows<F, Fut>(rows: &mut [Row], config: &Config, submit: F) -> u64
where
    F: Fn(WorklogEntry) -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    let mut total_seconds = 0u64;
    for row in rows.iter_mut() {
        if row.logged == Some(true) {
            continue;
        }
        let mut range_failed = false;
        for raw_range in row.times.split(RANGE_DELIMITER) {
            match build_entry(row, raw_range, config) {
                Ok(entry) => {
                    let seconds = entry.time_spent_seconds;
                    match submit(entry).await {
                        Ok(true) => {
                            row.logged = Some(true);
                            total_seconds += seconds as u64;
                        }
                        Ok(false) => range_failed = true,
                        Err(err) => {
                            range_failed = true;
                            println!(
                                "Failed to log work for issue {}: {}",
                                row.ticket.red(),
                                err
                            );
                        }
                    }
                }
                Err(err) => {
                    range_failed = true;
                    println!(
                        "Failed to log work for issue {}: {}",
                        row.ticket.red(),
                        err
                    );
                }
            }
        }
        if range_failed {
            row.logged = Some(false);
        }
    }
    total_seconds
}

fn build_entry(row: &Row, raw_range: &str, config: &Config) -> Result<WorklogEntry, SyncError> {
    let range = times::parse_time_range(raw_range)?;
    let started = times::to_utc_timestamp(&row.date, range.start, config.local_tz)?;
    Ok(WorklogEntry {
        issue_key: row.ticket.to_string(),
        comment: row.description.to_string(),
        started,
        time_spent_seconds: range.seconds,
    })
}

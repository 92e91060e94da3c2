use anyhow::Context;

use super::structs::Row;

/// Reads the whole sheet into memory, coercing blank `Logged` cells to false
/// so the driver only ever sees a concrete flag.
pub fn load_rows(path: &str) -> anyhow::Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open timesheet at {path}"))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let mut row: Row = record?;
        row.logged = Some(row.logged.unwrap_or(false));
        rows.push(row);
    }
    Ok(rows)
}

/// Rewrites the sheet in place, same columns, same row order.
pub fn save_rows(path: &str, rows: &[Row]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to write timesheet at {path}"))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

use crate::cli::Cli;
use crate::error::{GchangesError, Result};
use crate::git::GitCli;
use crate::model::{ReportOutput, ReportRow, SCHEMA_VERSION};
use chrono::Utc;

pub const CSV_HEADER: [&str; 6] = [
    "Commit Hash",
    "Date",
    "Message",
    "Change Type",
    "File",
    "Changed Lines",
];

/// Render the full report as one CSV string, header row included. Fields
/// containing commas, quotes, or newlines are quoted so the output
/// round-trips through any standard CSV reader.
pub fn render_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        let changed_lines = row.changed_lines.to_string();
        writer.write_record([
            row.commit_hash.as_str(),
            row.date.as_str(),
            row.message.as_str(),
            row.change_kind.code(),
            row.file.as_str(),
            changed_lines.as_str(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| GchangesError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

pub fn output_json(rows: &[ReportRow], git: &GitCli, args: &Cli) -> anyhow::Result<()> {
    let output = ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: git.path().to_string_lossy().to_string(),
        since: args.since.clone(),
        until: args.until.clone(),
        path: args.path.clone(),
        rows: rows.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(rows: &[ReportRow]) -> anyhow::Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

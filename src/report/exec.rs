use crate::cli::Cli;
use crate::error::Result;
use crate::git::{GitCli, GitRunner};
use crate::model::{ReportRow, RowSkeleton};
use anyhow::Context;
use console::style;

use super::{count_changed_lines, output_json, output_ndjson, parse_log, render_csv};

pub fn exec(args: Cli) -> anyhow::Result<()> {
    let git = GitCli::new(args.repo.as_ref()).context("Failed to resolve repository path")?;

    let raw = git
        .log(&args.since, &args.until, &args.path)
        .context("Failed to query git log")?;

    if raw.trim().is_empty() {
        println!(
            "{}",
            style(format!(
                "No commits found for '{}' between {} and {}.",
                args.path, args.since, args.until
            ))
            .dim()
        );
        return Ok(());
    }

    let rows = build_rows(&git, &raw).context("Failed to build report")?;

    if args.json {
        output_json(&rows, &git, &args)?;
    } else if args.ndjson {
        output_ndjson(&rows)?;
    } else {
        print!("{}", render_csv(&rows)?);
    }

    Ok(())
}

/// Parse the raw log and fill in the per-file line counts, one diff query
/// per change line, in parse order.
pub fn build_rows(git: &dyn GitRunner, raw_log: &str) -> Result<Vec<ReportRow>> {
    let skeletons = parse_log(raw_log)?;

    let mut rows = Vec::with_capacity(skeletons.len());
    for RowSkeleton { header, change } in skeletons {
        let changed_lines = count_changed_lines(git, &header.hash, &change.path)?;
        rows.push(ReportRow {
            commit_hash: header.hash,
            date: header.date,
            message: header.message,
            change_kind: change.kind,
            file: change.path,
            changed_lines,
        });
    }

    Ok(rows)
}

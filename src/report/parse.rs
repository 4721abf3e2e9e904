use crate::error::{GchangesError, Result};
use crate::model::{ChangeKind, ChangeRecord, CommitHeader, RowSkeleton};

/// Separator between hash, date, and subject on a header line; must match
/// the `--pretty` format handed to `git log`.
pub const HEADER_DELIMITER: char = ',';

/// Fold the raw `git log --name-status` text into one skeleton per change
/// line, each carrying the most recently seen commit header.
///
/// A line is tried as a change line before the delimiter check runs, so a
/// file path containing a comma is never taken for a header. Header lines
/// split into exactly three fields; the subject absorbs any further commas.
pub fn parse_log(raw: &str) -> Result<Vec<RowSkeleton>> {
    let mut rows = Vec::new();
    let mut current: Option<CommitHeader> = None;

    for line in raw.lines().filter(|l| !l.is_empty()) {
        if let Some(change) = parse_change_line(line) {
            let header = current.clone().ok_or_else(|| {
                GchangesError::Parse(format!("change line before any commit header: {line:?}"))
            })?;
            rows.push(RowSkeleton { header, change });
        } else if line.contains(HEADER_DELIMITER) {
            current = Some(parse_header_line(line)?);
        } else {
            return Err(GchangesError::Parse(format!("malformed log line: {line:?}")));
        }
    }

    Ok(rows)
}

fn parse_change_line(line: &str) -> Option<ChangeRecord> {
    let (code, path) = line.split_once('\t')?;
    let kind = ChangeKind::from_code(code)?;
    Some(ChangeRecord {
        kind,
        path: path.to_string(),
    })
}

fn parse_header_line(line: &str) -> Result<CommitHeader> {
    let mut fields = line.splitn(3, HEADER_DELIMITER);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(hash), Some(date), Some(message)) => Ok(CommitHeader {
            hash: hash.to_string(),
            date: date.to_string(),
            message: message.to_string(),
        }),
        _ => Err(GchangesError::Parse(format!(
            "malformed header line: {line:?}"
        ))),
    }
}

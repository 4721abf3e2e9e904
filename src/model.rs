use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// How a commit affected one file, as reported by `git log --name-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    #[serde(rename = "A")]
    Added,
    #[serde(rename = "M")]
    Modified,
    #[serde(rename = "D")]
    Deleted,
}

impl ChangeKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(ChangeKind::Added),
            "M" => Some(ChangeKind::Modified),
            "D" => Some(ChangeKind::Deleted),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ChangeKind::Added => "A",
            ChangeKind::Modified => "M",
            ChangeKind::Deleted => "D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitHeader {
    pub hash: String,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub path: String,
}

/// One change line paired with the commit it was listed under, before the
/// diff line count is filled in. Every record parsed under the same header
/// carries that header's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkeleton {
    pub header: CommitHeader,
    pub change: ChangeRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub commit_hash: String,
    pub date: String,
    pub message: String,
    pub change_kind: ChangeKind,
    pub file: String,
    pub changed_lines: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: String,
    pub until: String,
    pub path: String,
    pub rows: Vec<ReportRow>,
}

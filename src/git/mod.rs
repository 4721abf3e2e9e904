pub mod cli;

pub use cli::GitCli;

use crate::error::Result;

/// The two read-only queries the report pipeline issues against a
/// repository. Kept as a trait so tests can substitute canned output for
/// the real subprocess calls.
pub trait GitRunner {
    /// Log of commits in `[since, until]` touching `path`: one header line
    /// per commit (hash, date, subject joined by commas) followed by its
    /// name-status lines.
    fn log(&self, since: &str, until: &str, path: &str) -> Result<String>;

    /// Diff of a single commit against its parents, restricted to `path`.
    fn diff(&self, commit: &str, path: &str) -> Result<String>;
}

use crate::error::Result;
use crate::git::GitRunner;

/// Number of lines in the raw diff of one file in one commit. Counts every
/// line of the diff output, hunk headers and context included: a coarse
/// size proxy, not an insertion/deletion count.
pub fn count_changed_lines(git: &dyn GitRunner, commit: &str, path: &str) -> Result<u64> {
    let diff = git.diff(commit, path)?;
    Ok(diff.lines().count() as u64)
}

use crate::error::{GchangesError, Result};
use crate::git::GitRunner;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `git` as a subprocess in the repository's working directory.
pub struct GitCli {
    path: PathBuf,
}

impl GitCli {
    /// Use the repository at `path`, or the current dir if `None`.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            return Err(GchangesError::Git(
                String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitRunner for GitCli {
    fn log(&self, since: &str, until: &str, path: &str) -> Result<String> {
        let since = format!("--since={since}");
        let until = format!("--until={until}");
        // --no-renames keeps the status codes to the A/M/D set the parser
        // accepts; renames come through as a delete plus an add.
        self.run(&[
            "log",
            &since,
            &until,
            "--name-status",
            "--no-renames",
            "--pretty=format:%H,%ad,%s",
            "--date=short",
            "--",
            path,
        ])
    }

    fn diff(&self, commit: &str, path: &str) -> Result<String> {
        let rev = format!("{commit}^!");
        self.run(&["diff", &rev, "--", path])
    }
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gchanges")]
#[command(about = "Report commits and per-file changed-line counts for a path over a date window")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub since: String,

    #[arg(long, help = "End date (YYYY-MM-DD)")]
    pub until: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,

    #[arg(help = "Path to report on, relative to the repository root")]
    pub path: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}

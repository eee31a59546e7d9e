use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::alias;

#[derive(Parser)]
#[command(name = "punchcard")]
#[command(about = "Plot a repository's commit activity by hour of day from the GitHub API")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Repository owner (prompted for when omitted)")]
    pub owner: Option<String>,

    #[arg(help = "Repository name (prompted for when omitted)")]
    pub repo: Option<String>,

    #[arg(long, help = "Stack one bar series per canonical author")]
    pub split_authors: bool,

    #[arg(long, help = "Print the aggregation as JSON instead of rendering a chart")]
    pub json: bool,

    #[arg(long, help = "Output PNG path (defaults to commit_histogram_{owner}_{repo}.png)")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "RAW=CANONICAL",
        value_parser = alias::parse_alias_pair,
        help = "Map a raw author name onto a canonical one (repeatable)"
    )]
    pub alias: Vec<(String, String)>,

    #[arg(long, help = "Disable the fetch progress spinner")]
    pub no_progress: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::histogram::exec(self)
    }
}

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;

use super::aggregate::aggregate;
use super::output::{output_json, output_summary};
use super::render::render;
use crate::alias::AliasTable;
use crate::cli::Cli;
use crate::error::{PunchcardError, Result};
use crate::github::GitHubClient;
use crate::zone::DISPLAY_ZONE;

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let token = match std::env::var("GITHUB_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            println!("Please set the GITHUB_TOKEN environment variable.");
            return Ok(());
        }
    };

    let owner = match cli.owner {
        Some(owner) => owner,
        None => prompt("Enter the repository owner: ")?,
    };
    let repo = match cli.repo {
        Some(repo) => repo,
        None => prompt("Enter the repository name: ")?,
    };

    let client = GitHubClient::new(token).context("Failed to build HTTP client")?;
    let progress = !cli.no_progress && !cli.json;
    let commits = match client.list_commits(&owner, &repo, progress) {
        Err(PunchcardError::Fetch { status }) => {
            println!("Failed to fetch commits: {status}");
            return Ok(());
        }
        other => other.context("Failed to fetch commits")?,
    };

    if commits.is_empty() {
        println!("No commits found for {owner}/{repo}");
        return Ok(());
    }

    let aliases = AliasTable::builtin().extend_from_pairs(cli.alias);
    let agg = aggregate(&commits, &aliases, DISPLAY_ZONE, cli.split_authors)
        .context("Failed to aggregate commits")?;

    if cli.json {
        return output_json(&agg, &owner, &repo, DISPLAY_ZONE);
    }

    let filename = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("commit_histogram_{owner}_{repo}.png")));
    let title = format!(
        "{owner}/{repo}: Commits by Hour of the Day ({} to {})",
        agg.min_date, agg.max_date
    );
    render(&agg, &title, &filename).context("Failed to render histogram")?;

    output_summary(&agg, DISPLAY_ZONE, &filename)
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        return Err(PunchcardError::Config(format!(
            "no answer given for '{}'",
            label.trim_end_matches(": ")
        )));
    }
    Ok(answer.to_string())
}

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use console::style;

use crate::model::{Aggregation, AuthorSeries, HistogramOutput, SCHEMA_VERSION};

pub fn output_json(agg: &Aggregation, owner: &str, repo: &str, tz: Tz) -> Result<()> {
    let output = HistogramOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        timezone: tz.name().to_string(),
        min_date: agg.min_date,
        max_date: agg.max_date,
        total_commits: agg.total_commits,
        series: agg
            .authors
            .iter()
            .map(|a| AuthorSeries {
                author: a.author.clone(),
                counts: Aggregation::bucket_counts(&a.hours).to_vec(),
                total: a.hours.len(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(agg: &Aggregation, tz: Tz, filename: &Path) -> Result<()> {
    println!("Histogram saved as '{}'", filename.display());
    println!(
        "Total number of commits: {}",
        style(agg.total_commits).cyan()
    );
    println!(
        "Date range of commits: {} to {} ({})",
        style(agg.min_date).dim(),
        style(agg.max_date).dim(),
        tz.name()
    );
    println!("Spanning {} days", agg.day_span());
    Ok(())
}

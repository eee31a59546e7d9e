use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One entry of the GitHub commit-listing response. Only the fields the
/// histogram needs are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitMeta {
    pub author: AuthorMeta,
}

/// The date stays a raw string here; conversion parses it strictly and
/// rejects anything outside `YYYY-MM-DDTHH:MM:SSZ`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorMeta {
    pub name: String,
    pub date: String,
}

impl Commit {
    pub fn new(name: &str, date: &str) -> Self {
        Self {
            sha: String::new(),
            commit: CommitMeta {
                author: AuthorMeta {
                    name: name.to_string(),
                    date: date.to_string(),
                },
            },
        }
    }
}

/// Ordered hour sequence for one canonical author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorHours {
    pub author: String,
    pub hours: Vec<u32>,
}

/// Result of the aggregation pass. `authors` keeps first-seen order, which
/// is also the stacking order in the rendered chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregation {
    pub authors: Vec<AuthorHours>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub total_commits: usize,
}

impl Aggregation {
    /// Count an author's hours into the 24 fixed buckets.
    pub fn bucket_counts(hours: &[u32]) -> [u32; 24] {
        let mut counts = [0u32; 24];
        for &hour in hours {
            counts[hour as usize] += 1;
        }
        counts
    }

    pub fn day_span(&self) -> i64 {
        (self.max_date - self.min_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSeries {
    pub author: String,
    pub counts: Vec<u32>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub owner: String,
    pub repo: String,
    pub timezone: String,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub total_commits: usize,
    pub series: Vec<AuthorSeries>,
}

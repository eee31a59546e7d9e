use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::alias::AliasTable;
use crate::error::{PunchcardError, Result};
use crate::model::{Aggregation, AuthorHours, Commit};
use crate::zone;

/// Series key when the histogram is not split by author.
pub const ALL_AUTHORS: &str = "all";

/// Single pass over the fetched commits: resolve the author name, convert
/// the author timestamp into the display zone, and append the local hour to
/// that author's sequence. Authors keep first-seen order, which is also the
/// stacking order downstream.
///
/// Callers must check for an empty commit list beforehand; aggregating
/// nothing is a precondition violation.
pub fn aggregate(
    commits: &[Commit],
    aliases: &AliasTable,
    tz: Tz,
    split_authors: bool,
) -> Result<Aggregation> {
    if commits.is_empty() {
        return Err(PunchcardError::EmptyCommitSet);
    }

    let mut authors: Vec<AuthorHours> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut min_date = NaiveDate::MAX;
    let mut max_date = NaiveDate::MIN;

    for commit in commits {
        let stamp = zone::to_local(&commit.commit.author.date, tz)?;

        let key = if split_authors {
            aliases.resolve(&commit.commit.author.name)
        } else {
            ALL_AUTHORS
        };

        let idx = match index.get(key) {
            Some(&idx) => idx,
            None => {
                authors.push(AuthorHours {
                    author: key.to_string(),
                    hours: Vec::new(),
                });
                index.insert(key.to_string(), authors.len() - 1);
                authors.len() - 1
            }
        };
        authors[idx].hours.push(stamp.hour);

        min_date = min_date.min(stamp.date);
        max_date = max_date.max(stamp.date);
    }

    Ok(Aggregation {
        authors,
        min_date,
        max_date,
        total_commits: commits.len(),
    })
}

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{PunchcardError, Result};
use crate::model::Commit;

pub const PER_PAGE: u32 = 100;

const API_BASE: &str = "https://api.github.com";

/// Blocking GitHub commit-listing client. One instance per run; pages are
/// requested strictly in sequence and nothing is cached between runs.
pub struct GitHubClient {
    http: reqwest::blocking::Client,
    token: String,
    api_base: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("punchcard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
            api_base: API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root, e.g. a GitHub Enterprise
    /// host or a local test server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Fetch every commit of `owner/repo`, newest first, in the order the
    /// API returns them. Aborts on the first non-2xx page with no retry and
    /// no partial result.
    pub fn list_commits(&self, owner: &str, repo: &str, progress: bool) -> Result<Vec<Commit>> {
        let url = format!("{}/repos/{owner}/{repo}/commits", self.api_base);
        let pb = if progress {
            ProgressBar::new_spinner()
                .with_style(ProgressStyle::with_template("{spinner} {msg}").unwrap())
        } else {
            ProgressBar::hidden()
        };

        let commits = paginate(|page| {
            pb.set_message(format!("Fetching commits, page {page}"));
            pb.tick();
            let response = self
                .http
                .get(&url)
                .query(&[("page", page), ("per_page", PER_PAGE)])
                .header("Authorization", format!("token {}", self.token))
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(PunchcardError::Fetch {
                    status: status.as_u16(),
                });
            }

            Ok(response.json()?)
        });

        pb.finish_and_clear();
        commits
    }
}

/// Accumulate pages starting at 1 until one comes back empty. A page error
/// aborts the whole fetch.
pub fn paginate<F>(mut fetch_page: F) -> Result<Vec<Commit>>
where
    F: FnMut(u32) -> Result<Vec<Commit>>,
{
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let batch = fetch_page(page)?;
        if batch.is_empty() {
            break;
        }
        all.extend(batch);
        page += 1;
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_first_page_yields_empty_result() {
        let mut calls = 0;
        let commits = paginate(|_| {
            calls += 1;
            Ok(vec![])
        })
        .unwrap();
        assert!(commits.is_empty());
        assert_eq!(calls, 1);
    }

    #[test]
    fn pages_concatenate_in_server_order() {
        let pages = vec![
            vec![Commit::new("a", "2023-01-02T00:00:00Z"), Commit::new("b", "2023-01-01T12:00:00Z")],
            vec![Commit::new("c", "2023-01-01T00:00:00Z")],
            vec![],
        ];
        let mut it = pages.into_iter();
        let commits = paginate(|_| Ok(it.next().unwrap())).unwrap();
        let names: Vec<_> = commits.iter().map(|c| c.commit.author.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn pagination_asks_for_increasing_pages() {
        let mut seen = Vec::new();
        paginate(|page| {
            seen.push(page);
            if page < 3 {
                Ok(vec![Commit::new("x", "2023-01-01T00:00:00Z")])
            } else {
                Ok(vec![])
            }
        })
        .unwrap();
        assert_eq!(seen, [1, 2, 3]);
    }

    #[test]
    fn page_error_aborts_without_partial_result() {
        let result = paginate(|page| {
            if page == 1 {
                Ok(vec![Commit::new("x", "2023-01-01T00:00:00Z")])
            } else {
                Err(PunchcardError::Fetch { status: 404 })
            }
        });
        match result {
            Err(PunchcardError::Fetch { status }) => assert_eq!(status, 404),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}

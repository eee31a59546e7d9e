use thiserror::Error;

pub type Result<T> = std::result::Result<T, PunchcardError>;

#[derive(Error, Debug)]
pub enum PunchcardError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to fetch commits: {status}")]
    Fetch { status: u16 },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No commits to aggregate")]
    EmptyCommitSet,
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_message_names_the_status_code() {
        let err = PunchcardError::Fetch { status: 404 };
        assert!(err.to_string().contains("404"));
    }
}

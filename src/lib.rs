//! Fetch a repository's commit history from the GitHub API and plot the
//! hour-of-day distribution as a stacked histogram.

pub mod alias;
pub mod cli;
pub mod error;
pub mod github;
pub mod histogram;
pub mod model;
pub mod zone;

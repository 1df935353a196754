//! Fetch the stargazers of a GitHub repository through the GraphQL API.
//!
//! [`github::GitHubClient`] issues one cursor-paged query per call and waits
//! out rate limiting. [`collector::collect_stargazers`] drives it until the
//! requested count is reached or GitHub runs out of stargazers.

pub mod cancel;
pub mod collector;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod types;

use cancel::CancelSignal;
use error::Result;
use github::GitHubClient;
use models::StargazerRecord;

pub use error::StargazerError;

/// Fetch up to `star_count` stargazers of `owner/repo` using the token in
/// `GITHUB_TOKEN`.
pub async fn fetch_stargazers(
    owner: &str,
    repo: &str,
    star_count: usize,
    cancel: &CancelSignal,
) -> Result<Vec<StargazerRecord>> {
    let client = GitHubClient::from_env()?;
    client.fetch_stargazers(owner, repo, star_count, cancel).await
}

use crate::cancel::CancelSignal;
use crate::collector::{collect_stargazers, PageSource};
use crate::config::ClientConfig;
use crate::error::{Result, StargazerError};
use crate::models::{Page, StargazerRecord};
use crate::types::{GraphQlResponse, StargazerEdge};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::json;
use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Largest `first:` value the stargazers connection accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient { client, config })
    }

    /// Client using default settings and the token from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Fetch up to `count` stargazers following `cursor`.
    ///
    /// A RATE_LIMITED error triggers a wait of `rate_limit_wait` followed by
    /// the identical request. This repeats for as long as GitHub keeps
    /// answering with a rate-limit error. Any other error list fails the
    /// call with [`StargazerError::Api`].
    ///
    /// GitHub is assumed to return edges in a stable order, so the cursor of
    /// the last edge is where the next page starts.
    pub async fn fetch_page(
        &self,
        owner: &str,
        repo: &str,
        count: u32,
        cursor: Option<&str>,
        cancel: &CancelSignal,
    ) -> Result<Page> {
        let token = self.config.require_token()?;

        if count == 0 || count > MAX_PAGE_SIZE {
            return Err(StargazerError::InvalidPageSize { count });
        }

        let query = build_stargazers_query(owner, repo, count, cursor);

        loop {
            match self.send_query(&query, token, cancel).await? {
                GraphQlResponse::Errors { errors } => {
                    if errors.first().is_some_and(|e| e.is_rate_limited()) {
                        warn!(
                            owner,
                            repo,
                            wait_secs = self.config.rate_limit_wait.as_secs(),
                            "Rate limit exceeded, waiting before retrying"
                        );
                        self.wait_for_rate_limit(cancel).await?;
                        continue;
                    }
                    return Err(StargazerError::Api(errors));
                }
                GraphQlResponse::Data { data } => {
                    return page_from_edges(data.repository.stargazers.edges, count);
                }
            }
        }
    }

    /// Collect up to `star_count` stargazers, oldest page first.
    pub async fn fetch_stargazers(
        &self,
        owner: &str,
        repo: &str,
        star_count: usize,
        cancel: &CancelSignal,
    ) -> Result<Vec<StargazerRecord>> {
        collect_stargazers(self, owner, repo, star_count, cancel).await
    }

    async fn send_query(
        &self,
        query: &str,
        token: &str,
        cancel: &CancelSignal,
    ) -> Result<GraphQlResponse> {
        let attempt = async {
            debug!(endpoint = %self.config.endpoint, "Sending stargazers query");

            let response = self
                .client
                .post(self.config.endpoint.as_str())
                .header(AUTHORIZATION, format!("token {}", token))
                .json(&json!({ "query": query }))
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                return Err(StargazerError::Http {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                    body,
                });
            }

            match serde_json::from_str::<GraphQlResponse>(&body) {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    debug!("Response matched neither data nor error shape: {}", e);
                    Err(StargazerError::UnexpectedResponse(body))
                }
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(StargazerError::Cancelled),
            result = attempt => result,
        }
    }

    async fn wait_for_rate_limit(&self, cancel: &CancelSignal) -> Result<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(StargazerError::Cancelled),
            _ = sleep(self.config.rate_limit_wait) => Ok(()),
        }
    }
}

impl PageSource for GitHubClient {
    fn fetch_page(
        &self,
        owner: &str,
        repo: &str,
        count: u32,
        cursor: Option<&str>,
        cancel: &CancelSignal,
    ) -> impl Future<Output = Result<Page>> + Send {
        GitHubClient::fetch_page(self, owner, repo, count, cursor, cancel)
    }
}

/// Build the stargazers query. Owner, repo and cursor are embedded as
/// escaped string literals; `after` is omitted for the first page.
pub fn build_stargazers_query(owner: &str, repo: &str, count: u32, cursor: Option<&str>) -> String {
    let after = cursor
        .map(|c| format!(", after: {}", string_literal(c)))
        .unwrap_or_default();

    format!(
        r#"{{
  repository(owner: {}, name: {}) {{
    stargazers(first: {}{}) {{
      edges {{
        starredAt
        node {{
          avatarUrl
          name
          login
        }}
        cursor
      }}
    }}
  }}
}}"#,
        string_literal(owner),
        string_literal(repo),
        count,
        after
    )
}

// JSON string escaping is valid GraphQL string syntax.
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn page_from_edges(edges: Vec<StargazerEdge>, requested: u32) -> Result<Page> {
    let cursor = match edges.last() {
        Some(edge) => edge.cursor.clone(),
        None => return Err(StargazerError::EmptyPage { requested }),
    };

    let records = edges.into_iter().map(StargazerRecord::from).collect();

    Ok(Page { records, cursor })
}

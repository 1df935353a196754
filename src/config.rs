use crate::error::{Result, StargazerError};
use std::time::Duration;
use url::Url;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// How long to wait before retrying after a RATE_LIMITED response.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Settings for [`GitHubClient`](crate::github::GitHubClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint the query is POSTed to
    pub endpoint: Url,
    /// Token sent as `authorization: token <value>`. Checked on every fetch.
    pub token: Option<String>,
    /// Delay before the retry that follows a rate-limit error
    pub rate_limit_wait: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL"),
            token: None,
            rate_limit_wait: DEFAULT_RATE_LIMIT_WAIT,
            timeout: Duration::from_secs(30),
            user_agent: format!("github-stargazers/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default settings with the token taken from [`TOKEN_ENV_VAR`].
    ///
    /// A missing or empty variable is not an error here; the first page
    /// fetch reports it before touching the network.
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            token,
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point the client at another GraphQL endpoint. The value must be an absolute URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint).map_err(|e| {
            StargazerError::Configuration(format!("Invalid endpoint '{}': {}", endpoint, e))
        })?;
        Ok(self)
    }

    pub fn with_rate_limit_wait(mut self, wait: Duration) -> Self {
        self.rate_limit_wait = wait;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured token, or a configuration error naming the variable to set.
    pub fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(StargazerError::Configuration(format!(
                "You need to set a {} environment variable",
                TOKEN_ENV_VAR
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.rate_limit_wait, Duration::from_secs(60));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_require_token_missing() {
        let config = ClientConfig::default();
        match config.require_token() {
            Err(StargazerError::Configuration(msg)) => assert!(msg.contains(TOKEN_ENV_VAR)),
            other => panic!("Expected Configuration error, got: {:?}", other),
        }
    }

    #[test]
    fn test_require_token_empty() {
        let config = ClientConfig::default().with_token("");
        assert!(matches!(
            config.require_token(),
            Err(StargazerError::Configuration(_))
        ));
    }

    #[test]
    fn test_require_token_present() {
        let config = ClientConfig::default().with_token("abc");
        assert_eq!(config.require_token().unwrap(), "abc");
    }

    #[test]
    fn test_with_endpoint_rejects_relative_url() {
        let result = ClientConfig::default().with_endpoint("/graphql");
        assert!(matches!(result, Err(StargazerError::Configuration(_))));
    }

    #[test]
    fn test_with_endpoint_accepts_absolute_url() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:8080/graphql")
            .unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/graphql");
    }
}

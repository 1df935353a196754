use serde::{Deserialize, Serialize};

/// Error kind GitHub reports when the GraphQL quota is exhausted.
pub const RATE_LIMITED: &str = "RATE_LIMITED";

// GitHub GraphQL response structures.
// An error list takes precedence over data when both are present.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GraphQlResponse {
    Errors { errors: Vec<ApiErrorEntry> },
    Data { data: StargazersData },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorEntry {
    pub fn is_rate_limited(&self) -> bool {
        self.kind.as_deref() == Some(RATE_LIMITED)
    }
}

#[derive(Debug, Deserialize)]
pub struct StargazersData {
    pub repository: GitHubRepository,
}

#[derive(Debug, Deserialize)]
pub struct GitHubRepository {
    pub stargazers: StargazerConnection,
}

#[derive(Debug, Deserialize)]
pub struct StargazerConnection {
    pub edges: Vec<StargazerEdge>,
}

#[derive(Debug, Deserialize)]
pub struct StargazerEdge {
    #[serde(rename = "starredAt")]
    pub starred_at: String,
    pub cursor: String,
    pub node: GitHubUser,
}

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    pub name: Option<String>,
    pub login: String,
}

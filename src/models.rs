use crate::types::StargazerEdge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single star event: who starred the repository and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StargazerRecord {
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    /// Display name, or the account login when the user has none.
    pub name: String,
    /// ISO 8601 timestamp exactly as GitHub returned it.
    pub date: String,
}

impl StargazerRecord {
    /// Parse `date` on demand. The stored value is never rewritten.
    pub fn starred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<StargazerEdge> for StargazerRecord {
    fn from(edge: StargazerEdge) -> Self {
        let name = match edge.node.name {
            Some(name) if !name.is_empty() => name,
            _ => edge.node.login,
        };

        StargazerRecord {
            avatar_url: edge.node.avatar_url,
            name,
            date: edge.starred_at,
        }
    }
}

/// One fetched page of stargazers in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<StargazerRecord>,
    /// Cursor of the last edge. Opaque; only ever handed back to the API.
    pub cursor: String,
}

impl Page {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

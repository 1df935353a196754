use crate::types::ApiErrorEntry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StargazerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("GitHub API error: {}", format_api_errors(.0))]
    Api(Vec<ApiErrorEntry>),

    #[error("Empty page: requested {requested} stargazers but none were returned")]
    EmptyPage { requested: u32 },

    #[error("Invalid page size {count}: must be between 1 and 100")]
    InvalidPageSize { count: u32 },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

fn format_api_errors(errors: &[ApiErrorEntry]) -> String {
    serde_json::to_string(errors).unwrap_or_else(|_| format!("{:?}", errors))
}

pub type Result<T> = std::result::Result<T, StargazerError>;

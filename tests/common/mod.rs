#![allow(dead_code)]

use github_stargazers::config::ClientConfig;
use github_stargazers::github::GitHubClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const TEST_TOKEN: &str = "test_token";
pub const TEST_RATE_LIMIT_WAIT: Duration = Duration::from_millis(20);

pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_endpoint(&format!("{}/graphql", server.uri()))
        .expect("mock server uri is a valid endpoint")
        .with_token(TEST_TOKEN)
        .with_rate_limit_wait(TEST_RATE_LIMIT_WAIT)
        .with_timeout(Duration::from_secs(10))
}

pub fn test_client(server: &MockServer) -> GitHubClient {
    GitHubClient::new(test_config(server)).expect("Failed to create client")
}

pub fn edge(i: usize) -> Value {
    json!({
        "starredAt": format!("2024-01-01T00:{:02}:{:02}Z", (i / 60) % 60, i % 60),
        "cursor": format!("c{}", i),
        "node": {
            "avatarUrl": format!("https://avatars.githubusercontent.com/u/{}", i),
            "name": format!("User {}", i),
            "login": format!("user{}", i)
        }
    })
}

pub fn stargazers_body(edges: Vec<Value>) -> Value {
    json!({
        "data": {
            "repository": {
                "stargazers": { "edges": edges }
            }
        }
    })
}

pub fn errors_body(kind: &str, message: &str) -> Value {
    json!({
        "errors": [{ "type": kind, "message": message }]
    })
}

pub fn rate_limited() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(errors_body("RATE_LIMITED", "API rate limit exceeded"))
}

/// Serves `total` stargazers, honouring the `first` and `after` arguments
/// of whatever query it receives.
pub struct PagedStargazers {
    pub total: usize,
}

impl Respond for PagedStargazers {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };
        let query = body["query"].as_str().unwrap_or_default();

        let first = argument(query, "first: ")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        let start = argument(query, "after: \"")
            .and_then(|c| c.trim_start_matches('c').parse::<usize>().ok())
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = (start + first).min(self.total);

        let edges = (start..end).map(edge).collect();
        ResponseTemplate::new(200).set_body_json(stargazers_body(edges))
    }
}

fn argument<'a>(query: &'a str, prefix: &str) -> Option<&'a str> {
    let start = query.find(prefix)? + prefix.len();
    let rest = &query[start..];
    let end = rest
        .find(|c: char| c == ',' || c == ')' || c == '"')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

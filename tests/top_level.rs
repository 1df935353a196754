use github_stargazers::cancel::CancelSignal;
use github_stargazers::config::TOKEN_ENV_VAR;
use github_stargazers::{fetch_stargazers, StargazerError};

// Only test in this binary, so changing the environment does not race others.
#[tokio::test]
async fn test_missing_token_is_configuration_error() {
    std::env::remove_var(TOKEN_ENV_VAR);

    let result = fetch_stargazers("foo", "bar", 10, &CancelSignal::never()).await;

    match result {
        Err(StargazerError::Configuration(msg)) => assert!(msg.contains(TOKEN_ENV_VAR)),
        other => panic!("Expected Configuration error, got: {:?}", other),
    }
}

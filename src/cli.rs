use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "github-stargazers")]
#[command(about = "Fetches the stargazers of a GitHub repository through the GraphQL API")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Number of stargazers to fetch
    #[arg(short, long, default_value_t = 100)]
    pub count: usize,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = "https://api.github.com/graphql")]
    pub endpoint: String,

    /// Seconds to wait after a rate-limit error before retrying
    #[arg(long, default_value_t = 60)]
    pub rate_limit_wait_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, OutputFormat};
use colored::*;
use github_stargazers::cancel::cancellation;
use github_stargazers::config::ClientConfig;
use github_stargazers::github::GitHubClient;
use github_stargazers::models::StargazerRecord;
use github_stargazers::StargazerError;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::default()
        .with_endpoint(&cli.endpoint)?
        .with_rate_limit_wait(Duration::from_secs(cli.rate_limit_wait_secs));
    if let Some(token) = cli.token.as_deref().filter(|t| !t.is_empty()) {
        config = config.with_token(token);
    }

    let client = GitHubClient::new(config).context("Failed to build GitHub client")?;
    let (handle, signal) = cancellation();

    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n{}", "🛑 Cancelling...".yellow());
            handle.cancel();
        }
    });

    let result = client
        .fetch_stargazers(&cli.owner, &cli.repo, cli.count, &signal)
        .await;
    ctrl_c.abort();

    let stargazers = match result {
        Ok(stargazers) => stargazers,
        Err(StargazerError::Cancelled) => {
            eprintln!("{}", "Cancelled before all stargazers were fetched".yellow());
            std::process::exit(130);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to fetch stargazers of {}/{}", cli.owner, cli.repo)
            });
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stargazers)?);
        }
        OutputFormat::Table => print_table(&cli.owner, &cli.repo, &stargazers),
    }

    Ok(())
}

fn print_table(owner: &str, repo: &str, stargazers: &[StargazerRecord]) {
    println!("{}", format!("Stargazers of {}/{}", owner, repo).bold().green());
    println!("{}", "=".repeat(50).dimmed());

    for (i, stargazer) in stargazers.iter().enumerate() {
        let date = stargazer
            .starred_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| stargazer.date.clone());
        println!(
            "{:>5}  {}  {}",
            (i + 1).to_string().dimmed(),
            date.cyan(),
            stargazer.name.bold()
        );
    }

    println!("{}", "=".repeat(50).dimmed());
    println!("📊 {} stargazers", stargazers.len());
}

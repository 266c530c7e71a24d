use clap::Parser;
use futures::{stream, StreamExt};
use job_posting_scraper::{
    fetch::DEFAULT_USER_AGENT, scrape_job_posting, FetchConfig, HttpFetcher, ScrapeReport,
};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Fetch job postings and print what could be extracted, one JSON object per URL.
#[derive(Debug, Parser)]
#[command(name = "job-posting-scraper", version)]
struct Cli {
    /// Posting URLs to scrape.
    #[arg(required = true)]
    urls: Vec<String>,

    /// Per-request timeout.
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,

    #[arg(long, default_value_t = 5)]
    max_redirects: usize,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// How many URLs are fetched at the same time.
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    let config = FetchConfig {
        user_agent: cli.user_agent.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
        max_redirects: cli.max_redirects,
        ..FetchConfig::default()
    };
    let fetcher = HttpFetcher::new(&config)?;
    let fetcher = &fetcher;

    let mut reports = stream::iter(cli.urls.iter())
        .map(|url| async move { ScrapeReport::new(url, scrape_job_posting(fetcher, url).await) })
        .buffer_unordered(cli.concurrency.max(1));

    let mut failed = 0;
    while let Some(report) = reports.next().await {
        if let Some(error) = report.error.as_ref() {
            warn!("{}: {}", report.url, error);
            failed += 1;
        }

        let line = if cli.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{}", line);
    }

    if failed > 0 {
        return Err(format!("{} of {} URLs failed", failed, cli.urls.len()).into());
    }
    Ok(())
}

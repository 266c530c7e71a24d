use clap::Parser;
use job_posting_scraper::{extract_with_source, ScrapeReport};
use std::{fs, path::PathBuf};
use tracing_subscriber::prelude::*;

/// Run the extraction pipeline over a saved HTML page, without any network access.
#[derive(Debug, Parser)]
#[command(name = "extract-file")]
struct Cli {
    file: PathBuf,

    /// URL the page was fetched from. Selects the site profile.
    #[arg(long, default_value = "")]
    url: String,

    /// Print a human readable summary instead of JSON.
    #[arg(long)]
    text: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "warn,html5ever=error,selectors=error".into()),
        )
        .init();

    let cli = Cli::parse();
    let html = fs::read_to_string(&cli.file)?;
    let extraction = extract_with_source(&html, &cli.url);

    if cli.text {
        println!("Source      : {:?}", extraction.source);
        print!("{}", extraction.job);
    } else {
        let report = ScrapeReport::new(&cli.url, Ok(extraction));
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

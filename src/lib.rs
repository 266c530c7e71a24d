//! Best-effort job posting extraction from arbitrary career-site HTML.
//!
//! Strategies are tried in order: JSON-LD `JobPosting` data, per-platform
//! selector profiles, then OpenGraph tags combined with generic heuristics.
//! Extraction itself never fails; only fetching does.

use tracing::info;

pub mod document;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod strategy;

mod data;
mod error;
mod utils;

pub use data::{merge_prefer_right, ScrapedJob};
pub use error::ScrapeError;
pub use fetch::{validate_url, FetchConfig, Fetcher, HttpFetcher};
pub use pipeline::{Extraction, ExtractionPipeline, ExtractionSource};

use chrono::{DateTime, FixedOffset};
use document::HtmlDocument;
use serde::Serialize;

lazy_static::lazy_static! {
    static ref PIPELINE: ExtractionPipeline = ExtractionPipeline::new();
}

/// Run the full pipeline over already fetched HTML.
pub fn extract_job_posting(html: &str, url: &str) -> ScrapedJob {
    extract_with_source(html, url).job
}

/// Like [`extract_job_posting`], also reporting which stage produced the record.
pub fn extract_with_source(html: &str, url: &str) -> Extraction {
    let doc = HtmlDocument::parse(html);
    PIPELINE.extract(&doc, url)
}

/// Validate `url`, fetch it and extract a posting. Fetch failures are the
/// only errors; an empty record is still a success.
pub async fn scrape_job_posting<F>(fetcher: &F, url: &str) -> Result<Extraction, ScrapeError>
where
    F: Fetcher + Sync + ?Sized,
{
    let url = validate_url(url)?;
    let html = fetcher.fetch(&url).await?;

    let extraction = extract_with_source(&html, url.as_str());
    info!("Extracted {} via {:?}", url, extraction.source);
    Ok(extraction)
}

/// One line of CLI output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
    pub url: String,
    pub scraped_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ExtractionSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<ScrapedJob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeReport {
    pub fn new<I: AsRef<str>>(url: I, result: Result<Extraction, ScrapeError>) -> Self {
        let (source, job, error) = match result {
            Ok(Extraction { source, job }) => (Some(source), Some(job), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        ScrapeReport {
            url: url.as_ref().to_string(),
            scraped_at: utils::get_now(),
            source,
            job,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

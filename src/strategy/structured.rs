use itertools::Itertools;
use serde_json::Value;
use tracing::debug;

use super::Strategy;
use crate::{
    data::ScrapedJob, document::Document, error::ScrapeError, normalize::normalize,
    utils::non_empty,
};

const JSON_LD: &str = "application/ld+json";
const JOB_POSTING: &str = "JobPosting";
const ADDRESS_PARTS: [&str; 3] = ["addressLocality", "addressRegion", "addressCountry"];

/// Reads schema.org `JobPosting` objects out of JSON-LD script blocks.
#[derive(Debug, Default)]
pub struct StructuredDataStrategy;

impl Strategy for StructuredDataStrategy {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn extract<D: Document>(&self, doc: &D, _url: &str) -> Option<ScrapedJob> {
        doc.all_scripts(JSON_LD)
            .into_iter()
            .enumerate()
            .find_map(|(i, script)| {
                let raw = doc.text(script);
                if raw.is_empty() {
                    return None;
                }
                match parse_block(&raw) {
                    Ok(value) => find_job_posting(&value).map(job_from_schema),
                    Err(e) => {
                        debug!("Skipping JSON-LD block #{}: {:?}", i, e);
                        None
                    }
                }
            })
    }
}

fn parse_block(raw: &str) -> Result<Value, ScrapeError> {
    Ok(serde_json::from_str(raw)?)
}

fn is_job_posting(schema: &&Value) -> bool {
    schema.get("@type").and_then(Value::as_str) == Some(JOB_POSTING)
}

fn find_job_posting(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(schemas) => schemas.iter().find(is_job_posting),
        schema => Some(schema).filter(is_job_posting),
    }
}

/// String values are taken verbatim; only blank ones count as missing.
fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

fn job_from_schema(schema: &Value) -> ScrapedJob {
    let company = schema
        .get("hiringOrganization")
        .and_then(|org| str_field(org, "name").or_else(|| str_field(org, "@name")));

    ScrapedJob {
        job_title: str_field(schema, "title").or_else(|| str_field(schema, "name")),
        company,
        location: non_empty(parse_json_ld_location(schema.get("jobLocation"))),
        job_description: schema
            .get("description")
            .and_then(Value::as_str)
            .map(normalize)
            .and_then(non_empty),
    }
}

/// Flatten a `jobLocation` value into a single display string.
///
/// Accepts a plain string, a `Place`-like object or a list of them (only the
/// first entry is used). Objects with an `address` are rendered as
/// `locality, region, country`; otherwise the object's `name` is used.
pub fn parse_json_ld_location(value: Option<&Value>) -> String {
    let location = match value {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };

    match location {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(place)) => match place.get("address") {
            Some(address @ Value::Object(_)) => ADDRESS_PARTS
                .iter()
                .filter_map(|part| address.get(*part).and_then(address_part))
                .join(", "),
            _ => place
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        _ => String::new(),
    }
}

/// `addressCountry` is often a nested `Country` object rather than a string.
fn address_part(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(_) => str_field(value, "name"),
        _ => None,
    }
}

use super::Strategy;
use crate::{data::ScrapedJob, document::Document};

const TITLE: [&str; 2] = [r#"meta[property="og:title"]"#, r#"meta[name="twitter:title"]"#];
const DESCRIPTION: [&str; 3] = [
    r#"meta[property="og:description"]"#,
    r#"meta[name="description"]"#,
    r#"meta[name="twitter:description"]"#,
];

/// Social card `<meta>` tags and the document `<title>`. Only ever supplies
/// a title and a description.
#[derive(Debug, Default)]
pub struct OpenGraphStrategy;

fn first_content<D: Document>(doc: &D, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .find_map(|selector| doc.select_attr(selector, "content"))
}

impl Strategy for OpenGraphStrategy {
    fn name(&self) -> &'static str {
        "open-graph"
    }

    fn extract<D: Document>(&self, doc: &D, _url: &str) -> Option<ScrapedJob> {
        Some(ScrapedJob {
            job_title: first_content(doc, &TITLE).or_else(|| doc.select_text("title")),
            company: None,
            location: None,
            job_description: first_content(doc, &DESCRIPTION),
        })
    }
}

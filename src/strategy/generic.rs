use super::Strategy;
use crate::{data::ScrapedJob, document::Document, normalize::normalize, utils::non_empty};

/// Text shorter than this is navigation or a teaser, not a job description.
pub const MIN_DESCRIPTION_CHARS: usize = 200;

const LOCATION: [&str; 3] = [
    r#"[class*="location"]"#,
    r#"[data-testid*="location"]"#,
    r#"[aria-label*="location"]"#,
];
const COMPANY: [&str; 3] = [
    r#"[class*="company-name"]"#,
    r#"[class*="employer"]"#,
    r#"[class*="org-name"]"#,
];
const LOGO: &str = r#"img[class*="logo"]"#;
const DESCRIPTION: [&str; 7] = [
    r#"[class*="job-description"]"#,
    r#"[class*="jobDescription"]"#,
    r#"[class*="description"]"#,
    r#"[class*="job-details"]"#,
    r#"[class*="posting-content"]"#,
    "article",
    "main",
];

/// Class-name patterns and a content-length heuristic for pages that match
/// no known platform.
#[derive(Debug, Default)]
pub struct GenericHeuristicStrategy;

impl GenericHeuristicStrategy {
    fn description<D: Document>(doc: &D) -> Option<String> {
        DESCRIPTION.iter().find_map(|selector| {
            let node = doc.select_first(selector)?;
            if doc.text(node).chars().count() > MIN_DESCRIPTION_CHARS {
                doc.html(node).map(|html| normalize(&html))
            } else {
                None
            }
        })
    }
}

impl Strategy for GenericHeuristicStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract<D: Document>(&self, doc: &D, _url: &str) -> Option<ScrapedJob> {
        let company = COMPANY
            .iter()
            .find_map(|selector| doc.select_text(selector))
            .or_else(|| doc.select_attr(LOGO, "alt"));

        Some(ScrapedJob {
            job_title: doc.select_text("h1"),
            company,
            location: LOCATION.iter().find_map(|selector| doc.select_text(selector)),
            job_description: Self::description(doc).and_then(non_empty),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{compile, HtmlDocument};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn extract(html: &str) -> ScrapedJob {
        GenericHeuristicStrategy
            .extract(&HtmlDocument::parse(html), "https://example.com")
            .unwrap()
    }

    #[test]
    fn test_title_location_company() {
        let job = extract(
            r#"<body>
                <img class="site-logo" alt="Logo Co" src="/l.png">
                <h1> Head of Support </h1>
                <span data-testid="job-location">Lisbon</span>
                <div class="employer-badge">Umbrella</div>
            </body>"#,
        );
        assert_eq!(job.job_title.as_deref(), Some("Head of Support"));
        assert_eq!(job.location.as_deref(), Some("Lisbon"));
        assert_eq!(job.company.as_deref(), Some("Umbrella"));
        assert_eq!(job.job_description, None);
    }

    #[test]
    fn test_location_priority_and_logo_fallback() {
        let job = extract(
            r#"<body>
                <div aria-label="location">Aria place</div>
                <div class="job-location">Class place</div>
                <img class="logo" alt="Logo Co">
            </body>"#,
        );
        assert_eq!(job.location.as_deref(), Some("Class place"));
        assert_eq!(job.company.as_deref(), Some("Logo Co"));
    }

    #[test]
    fn test_selectors_compile() {
        for selector in LOCATION.iter().chain(&COMPANY).chain(&DESCRIPTION).chain([&LOGO]) {
            assert!(compile(selector).is_some(), "{}", selector);
        }
    }

    #[test]
    fn test_aria_label_location() {
        let job = extract(r#"<body><div aria-label="job location">Oslo</div></body>"#);
        assert_eq!(job.location.as_deref(), Some("Oslo"));
    }

    #[test]
    fn test_testid_location_beats_aria_label() {
        let job = extract(
            r#"<body>
                <div aria-label="location">Aria place</div>
                <span data-testid="job-location">Testid place</span>
            </body>"#,
        );
        assert_eq!(job.location.as_deref(), Some("Testid place"));
    }

    #[test]
    fn test_org_name_beats_logo_alt() {
        let job = extract(
            r#"<body>
                <img class="logo" alt="Logo">
                <div class="org-name">Acme Org</div>
            </body>"#,
        );
        assert_eq!(job.company.as_deref(), Some("Acme Org"));
    }

    #[test]
    fn test_short_blocks_are_ignored() {
        let job = extract(
            r#"<body><div class="job-description">Too short.</div><main>Also short.</main></body>"#,
        );
        assert_eq!(job.job_description, None);
    }

    #[test]
    fn test_only_first_match_per_pattern_is_measured() {
        let long = "x".repeat(MIN_DESCRIPTION_CHARS + 1);
        let html = format!(
            r#"<div class="job-description">short</div>
               <div class="job-description">{long}</div>
               <article><p>{long}</p></article>"#
        );
        let job = extract(&html);
        assert_eq!(job.job_description, Some(long));
    }

    #[test]
    fn test_threshold_counts_characters() {
        // 200 multi-byte characters are not enough.
        let text = "é".repeat(MIN_DESCRIPTION_CHARS);
        let job = extract(&format!("<main>{}</main>", text));
        assert_eq!(job.job_description, None);
    }

    #[test]
    fn test_fixture() {
        let html = fs::read_to_string("tests/htmls/generic.html").expect("Invalid file path");
        let job = extract(&html);

        assert_eq!(job.job_title.as_deref(), Some("Warehouse Operations Lead"));
        assert_eq!(job.company.as_deref(), Some("Contoso Logistics"));
        assert_eq!(job.location.as_deref(), Some("Rotterdam, NL"));

        let description = job.job_description.unwrap();
        assert!(description.starts_with("Responsibilities\n\n• Run the night shift"));
        assert!(description.ends_with("Apply by sending us your CV."));
    }
}

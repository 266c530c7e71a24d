use tracing::debug;

use super::Strategy;
use crate::{data::ScrapedJob, document::Document, normalize::normalize, utils::non_empty};

/// Where a field value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Element text. For descriptions, the element's inner markup run
    /// through [`normalize`].
    Text(&'static str),
    /// Attribute of the first matching element.
    Attr(&'static str, &'static str),
}

/// CSS selectors for one hiring platform. Each field's lookups are tried in
/// order and the first non-blank value wins.
#[derive(Debug)]
pub struct SiteProfile {
    pub name: &'static str,
    /// Substring of the posting URL that identifies the platform.
    pub url_key: &'static str,
    pub job_title: &'static [Lookup],
    pub company: &'static [Lookup],
    pub location: &'static [Lookup],
    pub job_description: &'static [Lookup],
}

/// Checked in order; the first profile whose key appears in the URL is the
/// only one used.
pub static SITE_PROFILES: &[SiteProfile] = &[
    SiteProfile {
        name: "greenhouse",
        url_key: "greenhouse.io",
        job_title: &[
            Lookup::Text("h1.app-title"),
            Lookup::Text(r#"h1[class*="title"]"#),
            Lookup::Text("h1"),
        ],
        company: &[Lookup::Text(".company-name")],
        location: &[Lookup::Text(".location")],
        job_description: &[Lookup::Text("#content"), Lookup::Text("section.content")],
    },
    SiteProfile {
        name: "lever",
        url_key: "lever.co",
        job_title: &[Lookup::Text("h2")],
        company: &[Lookup::Attr("img.main-header-logo", "alt")],
        location: &[Lookup::Text(".sort-by-time.posting-category")],
        job_description: &[Lookup::Text(".posting-content section")],
    },
    SiteProfile {
        name: "workday",
        url_key: "workday.com",
        job_title: &[Lookup::Text(r#"h2[data-automation-id="jobPostingHeader"]"#)],
        company: &[Lookup::Text(r#"a[data-automation-id="companyName"]"#)],
        location: &[Lookup::Text(r#"[data-automation-id="locations"]"#)],
        job_description: &[Lookup::Text(r#"[data-automation-id="jobPostingDescription"]"#)],
    },
    SiteProfile {
        name: "myworkdayjobs",
        url_key: "myworkdayjobs.com",
        job_title: &[Lookup::Text(r#"[data-automation-id="jobPostingHeader"]"#)],
        company: &[],
        location: &[Lookup::Text(r#"[data-automation-id="locations"]"#)],
        job_description: &[],
    },
    SiteProfile {
        name: "ashby",
        url_key: "ashbyhq.com",
        job_title: &[Lookup::Text("h1")],
        company: &[Lookup::Text(r#"[class*="company"]"#)],
        location: &[Lookup::Text(r#"[class*="location"]"#)],
        job_description: &[Lookup::Text(r#"[class*="description"]"#)],
    },
];

impl SiteProfile {
    pub fn find(url: &str) -> Option<&'static SiteProfile> {
        SITE_PROFILES.iter().find(|p| url.contains(p.url_key))
    }

    fn text<D: Document>(doc: &D, lookups: &[Lookup]) -> Option<String> {
        lookups.iter().find_map(|lookup| match *lookup {
            Lookup::Text(selector) => doc.select_text(selector),
            Lookup::Attr(selector, name) => doc.select_attr(selector, name),
        })
    }

    fn description<D: Document>(doc: &D, lookups: &[Lookup]) -> Option<String> {
        lookups.iter().find_map(|lookup| match *lookup {
            Lookup::Text(selector) => doc
                .select_html(selector)
                .map(|html| normalize(&html))
                .and_then(non_empty),
            Lookup::Attr(selector, name) => doc.select_attr(selector, name),
        })
    }

    pub fn extract<D: Document>(&self, doc: &D) -> ScrapedJob {
        ScrapedJob {
            job_title: Self::text(doc, self.job_title),
            company: Self::text(doc, self.company),
            location: Self::text(doc, self.location),
            job_description: Self::description(doc, self.job_description),
        }
    }
}

/// Per-platform selectors for hiring systems recognised by URL.
#[derive(Debug, Default)]
pub struct SiteProfileStrategy;

impl Strategy for SiteProfileStrategy {
    fn name(&self) -> &'static str {
        "site-profile"
    }

    fn extract<D: Document>(&self, doc: &D, url: &str) -> Option<ScrapedJob> {
        match SiteProfile::find(url) {
            Some(profile) => {
                debug!("Using {} site profile for {}", profile.name, url);
                Some(profile.extract(doc))
            }
            None => Some(ScrapedJob::default()),
        }
    }
}

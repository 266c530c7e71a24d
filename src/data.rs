use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-effort job posting record. Every field is independent and may be
/// missing; blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl ScrapedJob {
    /// A title or an employer is enough for a strategy's result to be accepted.
    pub fn is_identified(&self) -> bool {
        self.job_title.is_some() || self.company.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_identified() && self.location.is_none() && self.job_description.is_none()
    }
}

/// Field-wise merge where `over` wins whenever it has a value.
pub fn merge_prefer_right(base: ScrapedJob, over: ScrapedJob) -> ScrapedJob {
    ScrapedJob {
        job_title: over.job_title.or(base.job_title),
        company: over.company.or(base.company),
        location: over.location.or(base.location),
        job_description: over.job_description.or(base.job_description),
    }
}

impl fmt::Display for ScrapedJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let none = "None".to_string();
        writeln!(f, "Title       : {}", self.job_title.as_ref().unwrap_or(&none))?;
        writeln!(f, "Company     : {}", self.company.as_ref().unwrap_or(&none))?;
        writeln!(f, "Location    : {}", self.location.as_ref().unwrap_or(&none))?;
        writeln!(f, "Description : ")?;
        if let Some(d) = self.job_description.as_ref() {
            writeln!(f, "> {}", d.replace('\n', "\n  "))?;
        }
        Ok(())
    }
}

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("This site requires authentication or blocks automated access.")]
    AuthRequired,

    #[error("Job posting not found (404). The URL may be expired.")]
    NotFound,

    #[error("Failed to fetch the URL. The site may block scraping.")]
    Network(#[source] Option<reqwest::Error>),

    #[error("Invalid URL format")]
    InvalidUrl(String),

    #[error("Only HTTP/HTTPS URLs are supported")]
    UnsupportedScheme(String),

    /// A single JSON-LD block failed to parse. Recovered inside the
    /// structured data strategy and never returned to callers.
    #[error("Malformed JSON-LD block")]
    MalformedStructuredData(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ScrapeError::AuthRequired,
            StatusCode::NOT_FOUND => ScrapeError::NotFound,
            _ => ScrapeError::Network(None),
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status().map(ScrapeError::from_status) {
            Some(ScrapeError::Network(_)) | None => ScrapeError::Network(Some(err)),
            Some(classified) => classified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            ScrapeError::from_status(StatusCode::FORBIDDEN),
            ScrapeError::AuthRequired
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::UNAUTHORIZED),
            ScrapeError::AuthRequired
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::NOT_FOUND),
            ScrapeError::NotFound
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            ScrapeError::Network(None)
        ));
    }

    #[test]
    fn test_messages_are_distinct() {
        let auth = ScrapeError::from_status(StatusCode::FORBIDDEN).to_string();
        let not_found = ScrapeError::from_status(StatusCode::NOT_FOUND).to_string();
        let network = ScrapeError::Network(None).to_string();

        assert_eq!(
            auth,
            "This site requires authentication or blocks automated access."
        );
        assert!(not_found.contains("not found"));
        assert_eq!(network, "Failed to fetch the URL. The site may block scraping.");
        assert_ne!(auth, not_found);
        assert_ne!(not_found, network);
    }
}

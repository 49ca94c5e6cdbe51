use thiserror::Error;

/// Failure while loading the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport failure or timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx reply without an explanatory envelope.
    #[error("catalog service answered HTTP {0}")]
    Status(u16),

    /// Local catalog file could not be read.
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Body is not a valid envelope.
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope with `success: false`, optionally carrying the service message.
    #[error("catalog service reported failure{}", .0.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Unsuccessful(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Error messages carry the service detail when present
    ///
    /// - Input: `Unsuccessful` with and without a message; `Status(503)`
    /// - Output: Human-readable text including the detail
    fn error_messages_are_readable() {
        assert_eq!(
            CatalogError::Unsuccessful(Some("db down".into())).to_string(),
            "catalog service reported failure: db down"
        );
        assert_eq!(
            CatalogError::Unsuccessful(None).to_string(),
            "catalog service reported failure"
        );
        assert_eq!(
            CatalogError::Status(503).to_string(),
            "catalog service answered HTTP 503"
        );
    }
}

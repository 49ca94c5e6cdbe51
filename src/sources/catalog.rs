//! Catalog loader: fetches the full product list from the service or a file.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::sources::CatalogError;
use crate::state::Product;
use crate::theme::Settings;

/// Response envelope returned by the catalog service.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Product>>,
    #[serde(default)]
    message: Option<String>,
}

/// Where products are loaded from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// `GET url` against the catalog service.
    Http {
        /// Shared client carrying the request timeout.
        client: reqwest::Client,
        /// Full endpoint URL; no query parameters are added.
        url: String,
    },
    /// Local JSON file holding the same envelope.
    File(PathBuf),
}

impl CatalogSource {
    /// What: Build an HTTP source with the given timeout.
    ///
    /// Inputs:
    /// - `url`: Catalog endpoint
    /// - `timeout`: Whole-request timeout
    ///
    /// Output:
    /// - `CatalogSource::Http`, or the client builder error.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend cannot be initialised.
    pub fn http(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::Http {
            client,
            url: url.into(),
        })
    }

    /// What: Pick the source configured in settings.
    ///
    /// Inputs:
    /// - `settings`: Resolved settings
    ///
    /// Output:
    /// - `File` when `catalog_file` is set, otherwise `Http` for `catalog_url`.
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        if let Some(path) = &settings.catalog_file {
            return Ok(Self::File(path.clone()));
        }
        Self::http(
            settings.catalog_url.clone(),
            Duration::from_secs(settings.request_timeout_secs.max(1)),
        )
    }

    /// Short description for logs and the status line.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Http { url, .. } => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// What: Load the entire catalog.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - Every product on success.
    ///
    /// # Errors
    /// - `Http` on transport failure or timeout
    /// - `Status` on a non-2xx reply without a readable envelope
    /// - `Io` when the file cannot be read
    /// - `Decode` on malformed JSON
    /// - `Unsuccessful` when the envelope says `success: false`
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            Self::Http { client, url } => {
                let resp = client.get(url).send().await?;
                let status = resp.status();
                let body = resp.text().await?;
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), url = %url, "non-success catalog status");
                    // The service sometimes explains the failure in the envelope.
                    return match parse_envelope(&body) {
                        Err(CatalogError::Unsuccessful(msg)) => {
                            Err(CatalogError::Unsuccessful(msg))
                        }
                        _ => Err(CatalogError::Status(status.as_u16())),
                    };
                }
                parse_envelope(&body)
            }
            Self::File(path) => {
                let body = tokio::fs::read_to_string(path).await?;
                parse_envelope(&body)
            }
        }
    }
}

/// What: Decode a `{success, data, message}` envelope.
///
/// Inputs:
/// - `body`: Raw JSON text
///
/// Output:
/// - The product list when `success` is true; a missing `data` is an empty list.
///
/// # Errors
/// - `Decode` when the JSON does not match the envelope
/// - `Unsuccessful` carrying `message` when `success` is false
pub fn parse_envelope(body: &str) -> Result<Vec<Product>, CatalogError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.success {
        Ok(envelope.data.unwrap_or_default())
    } else {
        Err(CatalogError::Unsuccessful(envelope.message))
    }
}

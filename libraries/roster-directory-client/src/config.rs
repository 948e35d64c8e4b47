//! Connection configuration for the directory client.

use crate::error::{DirectoryError, Result};
use url::Url;

/// Configuration for connecting to a user-directory service.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the directory (e.g., "https://api.example.com")
    pub url: String,
}

impl DirectoryConfig {
    /// Create a config from a base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Validate and normalize the base URL.
    ///
    /// Trailing slashes are stripped so request paths can be appended
    /// uniformly. The URL must parse and use an http or https scheme;
    /// an empty URL is reported as unset rather than invalid.
    pub(crate) fn normalized_url(&self) -> Result<String> {
        if self.url.is_empty() {
            return Err(DirectoryError::MissingUrl);
        }

        let url = self.url.trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&url).map_err(|e| DirectoryError::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DirectoryError::InvalidUrl(format!(
                "unsupported scheme: {}",
                other
            ))),
        }
    }
}

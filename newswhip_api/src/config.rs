//! Transport settings for [`crate::Client`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use crate::Error;

/// Production API root.
pub const BASE_URL: &str = "https://api.newswhip.com/v1/";

/// Request timeout used when none is configured (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings used to build the underlying HTTP client.
///
/// Every field is optional and falls back to a default. The JSON content
/// type header is always set, and the API key is always sent as the `key`
/// query parameter, whatever the configuration says.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root. Defaults to [`BASE_URL`].
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// The API root, normalised to end with `/` so relative paths resolve
    /// beneath it.
    pub fn base_url(&self) -> Result<Url, Error> {
        let raw = self.base_url.as_deref().unwrap_or(BASE_URL);
        let normalised = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        let url = Url::parse(&normalised).map_err(|e| {
            Error::Configuration(format!("invalid base url {}: {}", raw, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base url {} cannot have relative paths",
                raw
            )));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("newswhip_api/{}", env!("CARGO_PKG_VERSION")));

        reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(self.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Configuration(format!("failed to build HTTP client: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().unwrap().as_str(), BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080");
        let url = config.base_url().unwrap();
        assert_eq!(url.join("region").unwrap().as_str(), "http://127.0.0.1:8080/region");
    }

    #[test]
    fn invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(config.base_url(), Err(Error::Configuration(_))));
        let config = ClientConfig::default().with_base_url("mailto:someone@example.com");
        assert!(matches!(config.base_url(), Err(Error::Configuration(_))));
    }

    #[test]
    fn deserializes_partial_mapping() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}

//! HTTP client for the NewsWhip v1 API.

use std::sync::OnceLock;

use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    definitions::{self, Category},
    query::{
        ArticlesQuery, CityQuery, HttpMethod, PublisherQuery, Query, RegionQuery, Request,
        SearchQuery, StatsQuery,
    },
    Error,
};

/// Environment variable holding the API key for [`Client::from_env`].
pub const API_KEY_ENV: &str = "NEWSWHIP_API_KEY";
/// Environment variable enabling the debug flag for [`Client::from_env`].
pub const DEBUG_ENV: &str = "NEWSWHIP_DEBUG";

/// Client for the NewsWhip v1 API.
///
/// Every call performs one HTTP round trip and returns the decoded JSON body
/// unchanged. The API key is sent as the `key` query parameter on every
/// request. The underlying `reqwest::Client` is built on first use and
/// reused afterwards.
pub struct Client {
    api_key: String,
    debug: bool,
    config: ClientConfig,
    base_url: Url,
    http: OnceLock<reqwest::Client>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Client {
    /// Creates a client for the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(api_key, ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::from_config(api_key, ClientConfig::default().with_base_url(base_url))
    }

    /// Creates a client whose transport is built from `config`.
    pub fn from_config(api_key: &str, config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            api_key: validate_api_key(api_key)?,
            debug: false,
            base_url: config.base_url()?,
            config,
            http: OnceLock::new(),
        })
    }

    /// Creates a client from `NEWSWHIP_API_KEY` and the optional
    /// `NEWSWHIP_DEBUG` (`1`, `true` or `yes`).
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Configuration(format!("{} is not set", API_KEY_ENV)))?;
        let debug = std::env::var(DEBUG_ENV)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self::new(&api_key)?.with_debug(debug))
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: &str) -> Result<(), Error> {
        self.api_key = validate_api_key(api_key)?;
        Ok(())
    }

    /// The debug flag. It is carried for callers and does not change how
    /// requests are made.
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the HTTP client, building it from the current configuration on
    /// first use.
    pub fn http_client(&self) -> Result<&reqwest::Client, Error> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }
        let built = self.config.build_http_client()?;
        Ok(self.http.get_or_init(|| built))
    }

    /// Replaces the HTTP client with a pre-built one. The client should send
    /// `Content-Type: application/json`; the API key and base URL are still
    /// applied by this client.
    pub fn set_http_client(&mut self, client: reqwest::Client) {
        self.http = OnceLock::from(client);
    }

    /// Rebuilds the HTTP client from `config`, merged with the defaults.
    pub fn set_config(&mut self, config: ClientConfig) -> Result<(), Error> {
        let base_url = config.base_url()?;
        let client = config.build_http_client()?;
        self.base_url = base_url;
        self.config = config;
        self.http = OnceLock::from(client);
        Ok(())
    }

    /// Sends an assembled request and decodes the JSON response.
    ///
    /// Any status other than 200 is returned as [`Error::Api`] with the
    /// status code and its reason phrase.
    pub async fn dispatch(&self, request: &Request) -> Result<Value, Error> {
        let url = self.base_url.join(request.path()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Validation(format!("invalid request path {}: {}", request.path(), e))
        })?;
        let client = self.http_client()?;

        tracing::debug!(method = %request.method(), path = request.path(), "dispatching request");

        let builder = match request.method() {
            HttpMethod::Get => client.get(url),
            HttpMethod::Post => {
                let builder = client.post(url);
                match request.body() {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let resp = builder
            .query(request.query_pairs())
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", request.path(), e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let reason = reason_phrase(&resp);
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if status != reqwest::StatusCode::OK {
            tracing::error!(
                "Request to {} failed with status {}: {}",
                request.path(),
                status,
                truncate_body(&body)
            );
            return Err(Error::Api {
                status: status.as_u16(),
                reason,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e.to_string())
        })
    }

    /// Validates and sends any request builder.
    pub async fn send<Q: Query>(&self, query: &Q) -> Result<Value, Error> {
        let request = query.to_request()?;
        self.dispatch(&request).await
    }

    /// Top articles for a region and category (`GET region/{region}/{category}/{period}`).
    pub async fn get_by_region(&self, query: &RegionQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// Top articles from a publisher (`GET publisher/{publisher}/{period}`).
    pub async fn get_by_publisher(&self, query: &PublisherQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// Top local articles for a city (`GET local/{city}/{period}`).
    pub async fn get_by_city(&self, query: &CityQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// Free-text article search (`GET search`).
    pub async fn get_by_search(&self, query: &SearchQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// Regions and categories the API covers (`GET region`).
    pub async fn get_regions_and_categories(&self) -> Result<Value, Error> {
        self.dispatch(&Request::get("region")).await
    }

    /// Cities and local regions the API covers (`GET local`).
    pub async fn get_cities_and_local_regions(&self) -> Result<Value, Error> {
        self.dispatch(&Request::get("local")).await
    }

    /// A sample of tracked publishers (`GET publisher`).
    pub async fn get_sample_publishers(&self) -> Result<Value, Error> {
        self.dispatch(&Request::get("publisher")).await
    }

    /// Articles matching a filter expression (`POST articles`).
    pub async fn get_articles(&self, query: &ArticlesQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// Aggregated stats for articles matching a filter expression (`POST stats`).
    pub async fn get_article_stats(&self, query: &StatsQuery) -> Result<Value, Error> {
        self.send(query).await
    }

    /// The static two-level category tree.
    pub fn category_hierarchy() -> Vec<Category> {
        definitions::category_hierarchy()
    }
}

/// The reason phrase the server sent. hyper only records it when it differs
/// from the canonical phrase for the status, so fall back to that.
fn reason_phrase(resp: &reqwest::Response) -> String {
    resp.extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .or_else(|| resp.status().canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}

fn validate_api_key(api_key: &str) -> Result<String, Error> {
    if api_key.trim().is_empty() {
        return Err(Error::Configuration(
            "an API key is required".to_string(),
        ));
    }
    Ok(api_key.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_api_key() {
        assert!(matches!(Client::new(""), Err(Error::Configuration(_))));
        assert!(matches!(Client::new("  "), Err(Error::Configuration(_))));
    }

    #[test]
    fn api_key_and_debug_accessors() {
        let mut client = Client::new("abc").unwrap();
        assert_eq!(client.api_key(), "abc");
        assert!(!client.debug());

        client.set_api_key("def").unwrap();
        client.set_debug(true);
        assert_eq!(client.api_key(), "def");
        assert!(client.debug());
        assert!(client.set_api_key("").is_err());
        assert_eq!(client.api_key(), "def");
    }

    #[test]
    fn debug_output_hides_key() {
        let client = Client::new("secret-key").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn set_config_rejects_bad_base_url() {
        let mut client = Client::new("abc").unwrap();
        let result = client.set_config(ClientConfig::default().with_base_url("::nope::"));
        assert!(matches!(result, Err(Error::Configuration(_))));
        assert_eq!(client.base_url().as_str(), crate::config::BASE_URL);
    }

    #[test]
    fn truncates_on_char_boundary() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn hierarchy_helper() {
        assert_eq!(
            Client::category_hierarchy().len(),
            definitions::CATEGORY_HIERARCHY.len()
        );
    }
}

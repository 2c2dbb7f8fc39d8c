//! Shared request infrastructure: the [`Request`] value, the [`Query`] and
//! [`ListingQuery`] traits, and [`ListingOptions`].

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::Error;

/// HTTP methods the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HttpMethod::Get => "GET",
                HttpMethod::Post => "POST",
            }
        )
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A fully assembled API call: method, path relative to the base URI, query
/// parameters, and an optional JSON body. The API key is added at dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    /// Builds a request from a method token such as `"get"` or `"POST"`.
    pub fn new(method: &str, path: &str) -> Result<Self, Error> {
        Ok(Self {
            method: method.parse()?,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        })
    }

    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: &str, body: Map<String, Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(Value::Object(body)),
        }
    }

    /// Appends one query parameter.
    pub fn with_query_pair(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends several query parameters in order.
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets the JSON body sent with a POST.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Query pairs rendered as `a=b&c=d`, without the API key.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Implemented by every request builder.
pub trait Query {
    /// Validates the builder and assembles the request it describes.
    fn to_request(&self) -> Result<Request, Error>;
}

/// Options shared by the GET listing endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    /// Maximum number of articles. Defaults to 100.
    pub size: i64,
    /// One of the article sort options. Defaults to `default`.
    pub sort_by: String,
    /// Restrict results to articles with video. Defaults to false.
    pub video_only: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            size: 100,
            sort_by: "default".to_string(),
            video_only: false,
        }
    }
}

impl ListingOptions {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("size".to_string(), self.size.to_string()),
            ("sort_by".to_string(), self.sort_by.clone()),
            ("video_only".to_string(), self.video_only.to_string()),
        ]
    }
}

/// Builder methods for the listing options shared by GET endpoints.
pub trait ListingQuery: Query {
    /// Returns a mutable reference to the shared listing options.
    fn get_common(&mut self) -> &mut ListingOptions;

    /// Sets the maximum number of results.
    fn with_size(mut self, size: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().size = size;
        self
    }

    /// Sets the sort option, e.g. `fb_total` or `nw_score`.
    fn with_sort_by(mut self, sort_by: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_by = sort_by.to_string();
        self
    }

    /// Restricts results to articles with video.
    fn with_video_only(mut self, video_only: bool) -> Self
    where
        Self: Sized,
    {
        self.get_common().video_only = video_only;
        self
    }
}

/// Escapes a path segment with form-urlencoding rules: spaces become `+`,
/// alphanumerics and `*-._` are kept.
pub(crate) fn escape_segment(name: &str, value: &str) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", name)));
    }
    if value == "." || value == ".." {
        return Err(Error::Validation(format!("{} is not a valid name", name)));
    }
    Ok(url::form_urlencoded::byte_serialize(value.as_bytes()).collect())
}

/// Builds a POST body, dropping every entry whose value is falsy: `null`,
/// `false`, zero, `""`, `"0"`, and empty arrays or objects.
///
/// This means an explicit `video_only: false` or `size: 0` is never sent and
/// the server default applies instead.
pub(crate) fn drop_empty(entries: Vec<(&str, Value)>) -> Map<String, Value> {
    entries
        .into_iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn method_tokens() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        match "delete".parse::<HttpMethod>() {
            Err(Error::UnsupportedMethod(token)) => assert_eq!(token, "delete"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            Request::new("put", "articles"),
            Err(Error::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn listing_defaults() {
        let request = Request::get("search").with_query_pairs(ListingOptions::default().query_pairs());
        insta::assert_snapshot!(request.query_string(), @"size=100&sort_by=default&video_only=false");
    }

    #[test]
    fn escapes_like_form_encoding() {
        assert_eq!(escape_segment("region", "U.S.").unwrap(), "U.S.");
        assert_eq!(escape_segment("city", "New York, NY").unwrap(), "New+York%2C+NY");
        assert_eq!(escape_segment("category", "Food/Drink").unwrap(), "Food%2FDrink");
        assert!(matches!(escape_segment("city", " "), Err(Error::Validation(_))));
        assert!(matches!(escape_segment("region", ".."), Err(Error::Validation(_))));
    }

    #[test]
    fn drop_empty_removes_falsy_values() {
        let body = drop_empty(vec![
            ("filters", json!("brexit")),
            ("from", Value::Null),
            ("video_only", json!(false)),
            ("size", json!(0)),
            ("default_field", json!("")),
            ("language", json!("0")),
            ("find_related", json!(true)),
            ("to", json!(1_500_000_000_000_i64)),
        ]);
        assert_eq!(
            Value::Object(body),
            json!({"filters": "brexit", "find_related": true, "to": 1_500_000_000_000_i64})
        );
    }
}

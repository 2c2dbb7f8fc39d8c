use chrono::{DateTime, Utc};
use serde_json::json;

use crate::{filter::Filter, Error};

use super::common::{drop_empty, Query, Request};

/// Article search over a compiled filter expression (`POST articles`).
///
/// Falsy options are left out of the body, so `with_video_only(false)` and
/// `with_size(0)` have the same effect as not setting them.
#[derive(Clone, Debug)]
pub struct ArticlesQuery {
    pub filters: Filter,
    /// Quote phrases and join groups with `OR`. Defaults to true.
    pub auto_format: bool,
    /// Unix timestamp in milliseconds. The API defaults to one week ago.
    pub from: Option<i64>,
    /// Unix timestamp in milliseconds. The API defaults to now.
    pub to: Option<i64>,
    /// Two letter ISO 639-1 code. Defaults to `en`.
    pub language: Option<String>,
    pub sort_by: String,
    pub video_only: bool,
    /// Field searched by unscoped terms.
    pub default_field: Option<String>,
    /// Maximum number of articles, related stories included.
    pub size: Option<i64>,
    /// Collapse related stories. Defaults to true.
    pub find_related: bool,
}

impl ArticlesQuery {
    pub fn new(filters: impl Into<Filter>) -> Self {
        Self {
            filters: filters.into(),
            auto_format: true,
            from: None,
            to: None,
            language: Some("en".to_string()),
            sort_by: "default".to_string(),
            video_only: false,
            default_field: None,
            size: None,
            find_related: true,
        }
    }

    /// Enables or disables phrase quoting and `OR` groups.
    pub fn with_auto_format(mut self, auto_format: bool) -> Self {
        self.auto_format = auto_format;
        self
    }

    /// Only include articles published after this Unix timestamp (milliseconds).
    pub fn with_from(mut self, from_millis: i64) -> Self {
        self.from = Some(from_millis);
        self
    }

    /// Only include articles published after `from`.
    pub fn with_from_datetime(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from.timestamp_millis());
        self
    }

    /// Only include articles published before this Unix timestamp (milliseconds).
    pub fn with_to(mut self, to_millis: i64) -> Self {
        self.to = Some(to_millis);
        self
    }

    /// Only include articles published before `to`.
    pub fn with_to_datetime(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to.timestamp_millis());
        self
    }

    /// Sets the language, or `None` to search every language.
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(|l| l.to_string());
        self
    }

    /// Sets the sort option, e.g. `fb_total` or `nw_score`.
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = sort_by.to_string();
        self
    }

    /// Restricts results to articles with video.
    pub fn with_video_only(mut self, video_only: bool) -> Self {
        self.video_only = video_only;
        self
    }

    /// Sets the field searched by terms with no field scope.
    pub fn with_default_field(mut self, default_field: &str) -> Self {
        self.default_field = Some(default_field.to_string());
        self
    }

    /// Sets the maximum number of results.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Collapses related stories into their lead article when set.
    pub fn with_find_related(mut self, find_related: bool) -> Self {
        self.find_related = find_related;
        self
    }
}

impl Query for ArticlesQuery {
    fn to_request(&self) -> Result<Request, Error> {
        let filters = self.filters.compile(self.auto_format)?;
        let body = drop_empty(vec![
            ("filters", json!(filters)),
            ("from", json!(self.from)),
            ("to", json!(self.to)),
            ("language", json!(self.language)),
            ("sort_by", json!(self.sort_by)),
            ("video_only", json!(self.video_only)),
            ("default_field", json!(self.default_field)),
            ("size", json!(self.size)),
            ("find_related", json!(self.find_related)),
        ]);
        Ok(Request::post("articles", body))
    }
}

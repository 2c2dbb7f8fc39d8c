use chrono::{DateTime, Utc};
use serde_json::json;

use crate::{filter::Filter, Error};

use super::common::{drop_empty, Query, Request};

/// Aggregated social stats over a compiled filter expression (`POST stats`).
///
/// `sort_by` takes the form `{aggregation_name}.{stat_value}` (for example
/// `fb_likes.sum`) and `aggregate_by` names the grouping dimension. Neither is
/// checked against the documented options; see
/// [`crate::definitions::is_valid_stats_sort`] and
/// [`crate::definitions::is_valid_aggregate_by`].
#[derive(Clone, Debug)]
pub struct StatsQuery {
    pub filters: Filter,
    pub sort_by: String,
    pub aggregate_by: String,
    /// Quote phrases and join groups with `OR`. Defaults to true.
    pub auto_format: bool,
    pub from: Option<i64>,
    pub to: Option<i64>,
    /// Two letter ISO 639-1 code. Defaults to `en`.
    pub language: Option<String>,
    pub video_only: bool,
    pub default_field: Option<String>,
    /// Maximum number of aggregations.
    pub size: Option<i64>,
}

impl StatsQuery {
    pub fn new(filters: impl Into<Filter>, sort_by: &str, aggregate_by: &str) -> Self {
        Self {
            filters: filters.into(),
            sort_by: sort_by.to_string(),
            aggregate_by: aggregate_by.to_string(),
            auto_format: true,
            from: None,
            to: None,
            language: Some("en".to_string()),
            video_only: false,
            default_field: None,
            size: None,
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
}

impl Query for StatsQuery {
    fn to_request(&self) -> Result<Request, Error> {
        if self.filters.is_empty() {
            return Err(Error::Validation(
                "At least one filter must be passed".to_string(),
            ));
        }
        if self.sort_by.trim().is_empty() {
            return Err(Error::Validation("sort_by is required".to_string()));
        }
        if self.aggregate_by.trim().is_empty() {
            return Err(Error::Validation("aggregate_by is required".to_string()));
        }

        let filters = self.filters.compile(self.auto_format)?;
        let body = drop_empty(vec![
            ("filters", json!(filters)),
            ("from", json!(self.from)),
            ("to", json!(self.to)),
            ("language", json!(self.language)),
            ("sort_by", json!(self.sort_by)),
            ("aggregate_by", json!(self.aggregate_by)),
            ("video_only", json!(self.video_only)),
            ("default_field", json!(self.default_field)),
            ("size", json!(self.size)),
        ]);
        Ok(Request::post("stats", body))
    }
}

//! Sort and aggregation options for the `articles` and `stats` endpoints.
//!
//! These tables document what the API accepts. Requests do not enforce them;
//! callers that want to reject bad values early can use the `is_valid_*`
//! helpers.

/// `(value, label)` pairs accepted as `sort_by` by `articles` and the GET
/// listing endpoints.
pub const ARTICLE_SORT_OPTIONS: &[(&str, &str)] = &[
    ("default", "Default"),
    ("fb_likes", "Facebook Likes"),
    ("fb_shares", "Facebook Shares"),
    ("fb_comments", "Facebook Comments"),
    ("fb_total", "Facebook Overall"),
    ("twitter", "Twitter"),
    ("linkedin", "LinkedIn"),
    ("fb_tw_and_li", "Facebook, Twitter and LinkedIn"),
    ("nw_score", "Score"),
    ("nw_max_score", "Max Score"),
    ("created_at", "Created"),
];

/// Aggregation names, the left half of a stats `sort_by` value.
pub const STATS_AGGREGATION_NAMES: &[(&str, &str)] = &[
    ("fb_likes", "Facebook Likes"),
    ("fb_shares", "Facebook Shares"),
    ("fb_comments", "Facebook Comments"),
    ("fb_total", "Facebook Overall"),
    ("twitter", "Twitter"),
    ("linkedin", "LinkedIn"),
    ("pinterest", "Pinterest"),
];

/// Stat values, the right half of a stats `sort_by` value.
pub const STATS_VALUE_OPTIONS: &[(&str, &str)] = &[
    ("count", "Count"),
    ("min", "Min"),
    ("max", "Max"),
    ("avg", "Avg"),
    ("sum", "Sum"),
    ("sum_of_squares", "Sum of Squares"),
    ("variance", "Variance"),
    ("std_dev", "Standard Deviation"),
];

/// `(value, label)` pairs accepted as `aggregate_by` by `stats`.
pub const AGGREGATE_BY_OPTIONS: &[(&str, &str)] = &[
    ("publisher", "Publisher"),
    ("domains", "Domains"),
    ("domain", "Domain"),
    ("language", "Language"),
    ("authors", "Authors"),
    ("country", "Country"),
    ("categories", "Categories"),
];

/// Every legal stats `sort_by` value: `{aggregation_name}.{stat_value}`.
pub fn stats_sort_options() -> Vec<String> {
    STATS_AGGREGATION_NAMES
        .iter()
        .flat_map(|(name, _)| {
            STATS_VALUE_OPTIONS
                .iter()
                .map(move |(stat, _)| format!("{}.{}", name, stat))
        })
        .collect()
}

pub fn is_valid_article_sort(value: &str) -> bool {
    ARTICLE_SORT_OPTIONS.iter().any(|(v, _)| *v == value)
}

pub fn is_valid_stats_sort(value: &str) -> bool {
    match value.split_once('.') {
        Some((name, stat)) => {
            STATS_AGGREGATION_NAMES.iter().any(|(v, _)| *v == name)
                && STATS_VALUE_OPTIONS.iter().any(|(v, _)| *v == stat)
        }
        None => false,
    }
}

pub fn is_valid_aggregate_by(value: &str) -> bool {
    AGGREGATE_BY_OPTIONS.iter().any(|(v, _)| *v == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_sort_is_cross_product() {
        let options = stats_sort_options();
        assert_eq!(
            options.len(),
            STATS_AGGREGATION_NAMES.len() * STATS_VALUE_OPTIONS.len()
        );
        assert_eq!(options[0], "fb_likes.count");
        assert!(options.contains(&"pinterest.std_dev".to_string()));
    }

    #[test]
    fn stats_sort_validation() {
        assert!(is_valid_stats_sort("fb_likes.sum"));
        assert!(is_valid_stats_sort("twitter.sum_of_squares"));
        assert!(!is_valid_stats_sort("fb_likes"));
        assert!(!is_valid_stats_sort("created_at.sum"));
        assert!(!is_valid_stats_sort("fb_likes.median"));
        assert!(!is_valid_stats_sort("fb_likes.sum.extra"));
    }

    #[test]
    fn article_sort_and_aggregate_validation() {
        assert!(is_valid_article_sort("default"));
        assert!(is_valid_article_sort("nw_max_score"));
        assert!(!is_valid_article_sort("pinterest"));
        assert!(is_valid_aggregate_by("domains"));
        assert!(!is_valid_aggregate_by("headline"));
    }
}

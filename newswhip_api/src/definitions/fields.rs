use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Fields that may scope a term in a POST filter expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Headline,
    Summary,
    Authors,
    CountryCode,
    RegionCode,
    Language,
    Categories,
    Publisher,
    Domain,
    Href,
}

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::Headline,
        FilterField::Summary,
        FilterField::Authors,
        FilterField::CountryCode,
        FilterField::RegionCode,
        FilterField::Language,
        FilterField::Categories,
        FilterField::Publisher,
        FilterField::Domain,
        FilterField::Href,
    ];

    /// Field name as it appears in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Headline => "headline",
            FilterField::Summary => "summary",
            FilterField::Authors => "authors",
            FilterField::CountryCode => "country_code",
            FilterField::RegionCode => "region_code",
            FilterField::Language => "language",
            FilterField::Categories => "categories",
            FilterField::Publisher => "publisher",
            FilterField::Domain => "domain",
            FilterField::Href => "href",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Headline => "Headline",
            FilterField::Summary => "Summary",
            FilterField::Authors => "Authors",
            FilterField::CountryCode => "Country Code",
            FilterField::RegionCode => "Region Code",
            FilterField::Language => "Language",
            FilterField::Categories => "Categories",
            FilterField::Publisher => "Publisher",
            FilterField::Domain => "Domain",
            FilterField::Href => "Link",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Invalid filter field passed ({})", s)))
    }
}

//! Client for the NewsWhip v1 news analytics API.
//!
//! Covers the GET listing endpoints, article search and stats over
//! Lucene-style filter expressions, and the static reference data (filter
//! fields, sort options, categories, regions and cities) the API expects
//! callers to know.

mod client;
mod config;
pub mod definitions;
mod errors;
mod filter;
mod query;
pub use self::client::{Client, API_KEY_ENV, DEBUG_ENV};
pub use self::config::{ClientConfig, BASE_URL};
pub use self::definitions::{Category, CategoryRef, FilterField};
pub use self::errors::Error;
pub use self::filter::{Filter, FilterTerm, FilterValue};
pub use self::query::{
    ArticlesQuery, CityQuery, HttpMethod, ListingOptions, ListingQuery, PublisherQuery, Query,
    RegionQuery, Request, SearchQuery, StatsQuery,
};

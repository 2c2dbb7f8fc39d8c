//! Builders for the GET listing endpoints: by region, publisher, city and
//! free-text search.

use crate::Error;

use super::common::{escape_segment, ListingOptions, ListingQuery, Query, Request};

/// Top articles for a region and category over a time period.
#[derive(Clone, Debug)]
pub struct RegionQuery {
    pub common: ListingOptions,
    pub region: String,
    pub category: String,
    pub time_period: u32,
}

impl RegionQuery {
    pub fn new(region: &str, category: &str, time_period: u32) -> Self {
        Self {
            common: ListingOptions::default(),
            region: region.to_string(),
            category: category.to_string(),
            time_period,
        }
    }
}

impl Query for RegionQuery {
    fn to_request(&self) -> Result<Request, Error> {
        let path = format!(
            "region/{}/{}/{}",
            escape_segment("region", &self.region)?,
            escape_segment("category", &self.category)?,
            self.time_period
        );
        Ok(Request::get(&path).with_query_pairs(self.common.query_pairs()))
    }
}

impl ListingQuery for RegionQuery {
    fn get_common(&mut self) -> &mut ListingOptions {
        &mut self.common
    }
}

/// Top articles from one publisher over a time period.
#[derive(Clone, Debug)]
pub struct PublisherQuery {
    pub common: ListingOptions,
    pub publisher: String,
    pub time_period: u32,
}

impl PublisherQuery {
    pub fn new(publisher: &str, time_period: u32) -> Self {
        Self {
            common: ListingOptions::default(),
            publisher: publisher.to_string(),
            time_period,
        }
    }
}

impl Query for PublisherQuery {
    fn to_request(&self) -> Result<Request, Error> {
        let path = format!(
            "publisher/{}/{}",
            escape_segment("publisher", &self.publisher)?,
            self.time_period
        );
        Ok(Request::get(&path).with_query_pairs(self.common.query_pairs()))
    }
}

impl ListingQuery for PublisherQuery {
    fn get_common(&mut self) -> &mut ListingOptions {
        &mut self.common
    }
}

/// Top local articles for a city over a time period.
#[derive(Clone, Debug)]
pub struct CityQuery {
    pub common: ListingOptions,
    pub city: String,
    pub time_period: u32,
}

impl CityQuery {
    pub fn new(city: &str, time_period: u32) -> Self {
        Self {
            common: ListingOptions::default(),
            city: city.to_string(),
            time_period,
        }
    }
}

impl Query for CityQuery {
    fn to_request(&self) -> Result<Request, Error> {
        let path = format!(
            "local/{}/{}",
            escape_segment("city", &self.city)?,
            self.time_period
        );
        Ok(Request::get(&path).with_query_pairs(self.common.query_pairs()))
    }
}

impl ListingQuery for CityQuery {
    fn get_common(&mut self) -> &mut ListingOptions {
        &mut self.common
    }
}

/// Free-text article search. The term is sent verbatim as `q`.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub common: ListingOptions,
    pub search: String,
}

impl SearchQuery {
    pub fn new(search: &str) -> Self {
        Self {
            common: ListingOptions::default(),
            search: search.to_string(),
        }
    }
}

impl Query for SearchQuery {
    fn to_request(&self) -> Result<Request, Error> {
        Ok(Request::get("search")
            .with_query_pairs(self.common.query_pairs())
            .with_query_pair("q", &self.search))
    }
}

impl ListingQuery for SearchQuery {
    fn get_common(&mut self) -> &mut ListingOptions {
        &mut self.common
    }
}

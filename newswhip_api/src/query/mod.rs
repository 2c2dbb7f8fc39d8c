mod common;
pub use self::common::{HttpMethod, ListingOptions, ListingQuery, Query, Request};

mod listing;
pub use self::listing::{CityQuery, PublisherQuery, RegionQuery, SearchQuery};

mod articles;
pub use self::articles::ArticlesQuery;

mod stats;
pub use self::stats::StatsQuery;

//! Static reference data published by NewsWhip: filterable fields, sort and
//! aggregation options, the category taxonomy, and region/city ids.
//!
//! Category, region and city ids are needed by several endpoints but are not
//! served by the API itself.

mod categories;
pub use self::categories::{
    category_by_name, category_hierarchy, category_name, Category, CategoryRef, CATEGORIES,
    CATEGORY_HIERARCHY,
};

mod fields;
pub use self::fields::FilterField;

mod options;
pub use self::options::{
    is_valid_aggregate_by, is_valid_article_sort, is_valid_stats_sort, stats_sort_options,
    AGGREGATE_BY_OPTIONS, ARTICLE_SORT_OPTIONS, STATS_AGGREGATION_NAMES, STATS_VALUE_OPTIONS,
};

mod regions;
pub use self::regions::{
    cities, city_by_name, region_by_name, region_name, City, Region, CITIES, REGIONS,
};

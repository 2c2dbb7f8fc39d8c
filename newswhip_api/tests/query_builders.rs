use newswhip_api::{
    ArticlesQuery, CityQuery, Error, Filter, FilterField, HttpMethod, ListingQuery,
    PublisherQuery, Query, RegionQuery, Request, SearchQuery, StatsQuery,
};
use serde_json::json;

#[test]
fn region_query_defaults() {
    let request = RegionQuery::new("U.S.", "News", 7).to_request().unwrap();
    assert_eq!(request.method(), HttpMethod::Get);
    assert_eq!(request.path(), "region/U.S./News/7");
    assert_eq!(request.query_string(), "size=100&sort_by=default&video_only=false");
    assert!(request.body().is_none());
}

#[test]
fn listing_options_apply_to_every_get_builder() {
    let requests = [
        RegionQuery::new("Ireland", "Sports", 24)
            .with_size(3)
            .to_request()
            .unwrap(),
        PublisherQuery::new("bbc.co.uk", 24)
            .with_size(3)
            .to_request()
            .unwrap(),
        CityQuery::new("London", 24).with_size(3).to_request().unwrap(),
        SearchQuery::new("tides").with_size(3).to_request().unwrap(),
    ];
    for request in requests.iter() {
        assert!(request
            .query_pairs()
            .contains(&("size".to_string(), "3".to_string())));
    }
}

#[test]
fn search_term_is_not_quoted() {
    let request = SearchQuery::new("\"exact phrase\"").to_request().unwrap();
    let q = request
        .query_pairs()
        .iter()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.clone());
    assert_eq!(q.as_deref(), Some("\"exact phrase\""));
}

#[test]
fn articles_body_drops_unset_values() {
    let request = ArticlesQuery::new(Filter::terms().with_field(FilterField::Domain, "bbc.co.uk"))
        .to_request()
        .unwrap();
    assert_eq!(request.method(), HttpMethod::Post);
    assert_eq!(
        request.body().unwrap(),
        &json!({
            "filters": "domain: bbc.co.uk",
            "language": "en",
            "sort_by": "default",
            "find_related": true
        })
    );
}

#[test]
fn articles_find_related_false_is_dropped() {
    let request = ArticlesQuery::new("brexit")
        .with_find_related(false)
        .to_request()
        .unwrap();
    assert!(request.body().unwrap().get("find_related").is_none());
}

#[test]
fn stats_requires_every_argument() {
    let missing_filters = StatsQuery::new(Filter::terms(), "fb_likes.sum", "publisher");
    assert!(matches!(missing_filters.to_request(), Err(Error::Validation(_))));

    let missing_sort = StatsQuery::new("brexit", "", "publisher");
    assert!(matches!(missing_sort.to_request(), Err(Error::Validation(_))));

    let ok = StatsQuery::new("brexit", "twitter.max", "domain")
        .with_from(1)
        .with_to(2)
        .to_request()
        .unwrap();
    assert_eq!(ok.body().unwrap()["from"], 1);
    assert_eq!(ok.body().unwrap()["to"], 2);
}

#[test]
fn unsupported_method_token() {
    match Request::new("PATCH", "articles") {
        Err(Error::UnsupportedMethod(token)) => assert_eq!(token, "PATCH"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(Request::new("Post", "stats").unwrap().method(), HttpMethod::Post);
}

use std::str::FromStr;

use tropicos_api::{Endpoint, ListNamesQuery, Query, SearchQuery, SearchType, SortOrder};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn search_query_only_sends_set_fields() {
    let url = SearchQuery::default()
        .with_family("Poaceae")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("family=Poaceae"));
}

#[test]
fn search_query_encodes_spaces() {
    let url = SearchQuery::default()
        .with_name("Quercus alba")
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("name".to_string(), "Quercus alba".to_string())]);
    assert!(url.query().unwrap().contains("name=Quercus+alba"));
}

#[test]
fn search_query_paging_params() {
    let url = SearchQuery::default()
        .with_name("Poa")
        .with_start_row(21)
        .with_page_size(20)
        .with_sort_order(SortOrder::Ascending)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("startrow=21"));
    assert!(query.contains("pagesize=20"));
    assert!(query.contains("sortorder=ascending"));
}

#[test]
fn passthrough_params_follow_modelled_ones() {
    let url = ListNamesQuery::new(5)
        .with_param("foo", "bar")
        .with_page_size(3)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("startid=5&pagesize=3&foo=bar"));
}

#[test]
fn enum_parsing() {
    assert_eq!(SearchType::from_str("wildcard"), Ok(SearchType::Wildcard));
    assert_eq!(SearchType::from_str("fuzzy"), Err(()));
    assert_eq!(SortOrder::from_str("desc"), Ok(SortOrder::Descending));
    assert_eq!(SortOrder::from_str("ascending"), Ok(SortOrder::Ascending));
}

#[test]
fn endpoint_operations() {
    assert_eq!(Endpoint::Search.operation(), "search");
    assert_eq!(Endpoint::AcceptedNames(1).operation(), "acceptedNames");
    assert_eq!(Endpoint::ChromosomeCounts(1).operation(), "chromosomeCounts");
    assert_eq!(Endpoint::ListNames.operation(), "listNames");
    assert_eq!(Endpoint::HigherTaxa(987654321).path(), "/Name/987654321/HigherTaxa");
}

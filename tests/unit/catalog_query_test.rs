//! Unit tests for the catalog query composer.

use rstest::rstest;

use cineshelf::services::catalog_query::{CatalogQuery, SortOrder};
use cineshelf::types::profile::MediaKind;

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[test]
fn test_default_query_is_first_page_by_popularity() {
    let params = CatalogQuery::new(MediaKind::Movie).to_params();

    assert_eq!(param(&params, "page"), Some("1"));
    assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
    assert_eq!(params.len(), 2);
}

#[rstest]
#[case(MediaKind::Movie, "primary_release_date.desc")]
#[case(MediaKind::Tv, "first_air_date.desc")]
fn test_newest_first_sort_field_per_kind(#[case] kind: MediaKind, #[case] expected: &str) {
    let params = CatalogQuery::new(kind).sort(SortOrder::NewestFirst).to_params();
    assert_eq!(param(&params, "sort_by"), Some(expected));
}

#[rstest]
#[case(MediaKind::Movie, "primary_release_year")]
#[case(MediaKind::Tv, "first_air_date_year")]
fn test_year_filter_parameter_per_kind(#[case] kind: MediaKind, #[case] expected_key: &str) {
    let params = CatalogQuery::new(kind).year(2010).to_params();
    assert_eq!(param(&params, expected_key), Some("2010"));
}

#[test]
fn test_rating_sort_is_kind_independent() {
    for kind in [MediaKind::Movie, MediaKind::Tv] {
        let params = CatalogQuery::new(kind).sort(SortOrder::RatingDesc).to_params();
        assert_eq!(param(&params, "sort_by"), Some("vote_average.desc"));
    }
}

#[test]
fn test_all_filters_compose() {
    let params = CatalogQuery::new(MediaKind::Movie)
        .page(4)
        .sort(SortOrder::RatingDesc)
        .genre(878)
        .year(1982)
        .min_rating(8.0)
        .to_params();

    assert_eq!(param(&params, "page"), Some("4"));
    assert_eq!(param(&params, "sort_by"), Some("vote_average.desc"));
    assert_eq!(param(&params, "with_genres"), Some("878"));
    assert_eq!(param(&params, "primary_release_year"), Some("1982"));
    assert_eq!(param(&params, "vote_average.gte"), Some("8"));
    assert_eq!(params.len(), 5);
}

#[test]
fn test_unset_filters_are_absent() {
    let params = CatalogQuery::new(MediaKind::Tv).to_params();

    assert_eq!(param(&params, "with_genres"), None);
    assert_eq!(param(&params, "first_air_date_year"), None);
    assert_eq!(param(&params, "vote_average.gte"), None);
}

#[test]
fn test_query_kind_is_preserved() {
    assert_eq!(CatalogQuery::new(MediaKind::Tv).kind(), MediaKind::Tv);
    assert_eq!(CatalogQuery::new(MediaKind::Movie).kind(), MediaKind::Movie);
}

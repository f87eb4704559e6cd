use super::*;
use crate::state::test_helpers::{MockEmbedder, MockShopping, listing, test_app_state};

// =========================================================================
// build_group
// =========================================================================

#[test]
fn build_group_uses_cheapest_title_as_product() {
    let group = build_group(vec![
        listing("Apple iPhone 15 (128 GB)", 71_500.0, "Amazon"),
        listing("iPhone 15 128GB", 69_900.0, "Flipkart"),
    ])
    .unwrap();
    assert_eq!(group.product, "iPhone 15 128GB");
    assert_eq!(group.best.as_ref().map(|b| b.source.as_str()), Some("Flipkart"));
    assert_eq!(group.offers.len(), 2);
    assert_eq!(group.offers[0].source, "Amazon");
    assert_eq!(group.verdict, "Flipkart offers the best price at ₹69900, ₹1600 cheaper than the next option.");
}

#[test]
fn build_group_empty_is_none() {
    assert!(build_group(Vec::new()).is_none());
}

#[test]
fn build_group_omits_blank_titles_from_offers() {
    let group = build_group(vec![listing("", 10.0, "S")]).unwrap();
    assert!(group.offers[0].title.is_none());
}

// =========================================================================
// compare
// =========================================================================

#[tokio::test]
async fn compare_rejects_blank_query_without_searching() {
    let shopping = MockShopping::returning(vec![listing("iPhone 15", 1.0, "A")]);
    let state = test_app_state(shopping.clone(), MockEmbedder::uniform(vec![1.0]));
    let err = compare(&state, "   ").await.unwrap_err();
    assert!(matches!(err, CompareError::EmptyQuery));
    assert!(shopping.queries().is_empty());
}

#[tokio::test]
async fn compare_trims_query_before_search() {
    let shopping = MockShopping::returning(Vec::new());
    let state = test_app_state(shopping.clone(), MockEmbedder::uniform(vec![1.0]));
    let groups = compare(&state, "  iphone 15  ").await.unwrap();
    assert!(groups.is_empty());
    assert_eq!(shopping.queries(), vec!["iphone 15".to_owned()]);
}

#[tokio::test]
async fn compare_groups_and_summarizes() {
    let shopping = MockShopping::returning(vec![
        listing("iPhone 15 128GB", 70_000.0, "A"),
        listing("iPhone 15 256GB", 80_000.0, "B"),
        listing("Apple iPhone 15 128 GB", 68_000.0, "C"),
    ]);
    let state = test_app_state(shopping, MockEmbedder::uniform(vec![1.0, 0.0]));
    let groups = compare(&state, "iphone 15").await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].product, "Apple iPhone 15 128 GB");
    assert_eq!(groups[0].offers.len(), 2);
    assert!(groups[0].verdict.starts_with("C offers the best price"));
    assert_eq!(groups[1].product, "iPhone 15 256GB");
    assert!(groups[1].verdict.starts_with("Only one seller available: B"));
}

#[tokio::test]
async fn compare_surfaces_search_failure() {
    let state = test_app_state(MockShopping::failing(), MockEmbedder::uniform(vec![1.0]));
    let err = compare(&state, "iphone").await.unwrap_err();
    assert!(matches!(err, CompareError::Provider(ProviderError::Status { status: 503, .. })));
}

#[tokio::test]
async fn compare_surfaces_embedding_failure() {
    let shopping = MockShopping::returning(vec![listing("iPhone 15", 1.0, "A")]);
    let state = test_app_state(shopping, MockEmbedder::failing());
    let err = compare(&state, "iphone").await.unwrap_err();
    assert!(matches!(err, CompareError::Provider(ProviderError::Request { .. })));
}

use super::*;
use crate::net::types::Offer;

fn group(product: &str) -> ComparisonGroup {
    ComparisonGroup {
        product: product.into(),
        verdict: "v".into(),
        offers: vec![Offer { source: "S".into(), price: 1.0, link: None, title: None }],
        best: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_hidden() {
    let state = SearchState::default();
    assert_eq!(state.status, SearchStatus::Idle);
    assert!(!state.carousel_visible);
    assert!(!state.scroll_hint_visible);
    assert!(state.results.is_empty());
    assert!(state.applied.is_none());
}

// =============================================================
// begin_search
// =============================================================

#[test]
fn empty_query_issues_nothing() {
    let mut state = SearchState::default();
    assert!(state.begin_search().is_none());
    assert_eq!(state.latest_token(), RequestToken::default());
}

#[test]
fn whitespace_query_leaves_container_untouched() {
    let mut state = SearchState::default();
    state.set_query("phone");
    let first = state.begin_search().unwrap();
    assert!(state.complete(first.token, Ok(vec![group("A")])));

    state.set_query("   \t ");
    assert!(state.begin_search().is_none());
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.status, SearchStatus::Ready);
    assert_eq!(state.latest_token(), first.token);
}

#[test]
fn begin_search_trims_and_shows_container() {
    let mut state = SearchState::default();
    state.set_query("  iphone 15  ");
    let req = state.begin_search().unwrap();
    assert_eq!(req.query, "iphone 15");
    assert!(state.carousel_visible);
    assert!(state.scroll_hint_visible);
    assert!(state.is_loading());
}

#[test]
fn begin_search_clears_previous_results() {
    let mut state = SearchState::default();
    state.set_query("a");
    let req = state.begin_search().unwrap();
    state.complete(req.token, Ok(vec![group("A"), group("B")]));

    state.begin_search().unwrap();
    assert!(state.results.is_empty());
}

#[test]
fn tokens_increase_monotonically() {
    let mut state = SearchState::default();
    state.set_query("a");
    let first = state.begin_search().unwrap().token;
    let second = state.begin_search().unwrap().token;
    assert!(second > first);
    assert_eq!(state.latest_token(), second);
}

// =============================================================
// complete
// =============================================================

#[test]
fn empty_response_keeps_container_visible() {
    let mut state = SearchState::default();
    state.set_query("nothing");
    let req = state.begin_search().unwrap();
    assert!(state.complete(req.token, Ok(Vec::new())));
    assert!(state.results.is_empty());
    assert!(state.carousel_visible);
    assert_eq!(state.status, SearchStatus::Ready);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = SearchState::default();
    state.set_query("old");
    let old = state.begin_search().unwrap();
    state.set_query("new");
    let new = state.begin_search().unwrap();

    assert!(state.complete(new.token, Ok(vec![group("New")])));
    assert!(!state.complete(old.token, Ok(vec![group("Old")])));

    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].product, "New");
    assert_eq!(state.applied, Some(new.token));
}

#[test]
fn stale_response_before_latest_does_not_settle_loading() {
    let mut state = SearchState::default();
    state.set_query("q");
    let old = state.begin_search().unwrap();
    let _new = state.begin_search().unwrap();

    assert!(!state.complete(old.token, Ok(vec![group("Old")])));
    assert!(state.is_loading());
    assert!(state.results.is_empty());
}

#[test]
fn failure_sets_visible_error() {
    let mut state = SearchState::default();
    state.set_query("q");
    let req = state.begin_search().unwrap();
    assert!(state.complete(req.token, Err("compare request failed: 502".into())));
    assert_eq!(state.error(), Some("compare request failed: 502"));
    assert!(state.carousel_visible);
    assert!(state.results.is_empty());
}

#[test]
fn new_search_clears_previous_error() {
    let mut state = SearchState::default();
    state.set_query("q");
    let req = state.begin_search().unwrap();
    state.complete(req.token, Err("boom".into()));
    state.begin_search().unwrap();
    assert!(state.error().is_none());
}

// =============================================================
// quick_search
// =============================================================

#[test]
fn quick_search_sets_query_and_matches_manual_search() {
    let mut quick = SearchState::default();
    let quick_req = quick.quick_search("foo").unwrap();
    assert_eq!(quick.query, "foo");

    let mut manual = SearchState::default();
    manual.set_query("foo");
    let manual_req = manual.begin_search().unwrap();

    assert_eq!(quick_req, manual_req);
    assert_eq!(quick.carousel_visible, manual.carousel_visible);
    assert_eq!(quick.status, manual.status);
}

#[test]
fn quick_search_with_blank_text_does_not_search() {
    let mut state = SearchState::default();
    assert!(state.quick_search("  ").is_none());
    assert!(!state.carousel_visible);
}

// =============================================================
// Scroll hint
// =============================================================

#[test]
fn scroll_hint_dismisses_once_per_search() {
    let mut state = SearchState::default();
    state.set_query("q");
    let request = state.begin_search().unwrap();
    assert!(state.complete(request.token, Ok(vec![group("P")])));
    assert!(state.dismiss_scroll_hint());
    assert!(!state.scroll_hint_visible);
    assert!(!state.dismiss_scroll_hint());

    state.begin_search().unwrap();
    assert!(state.scroll_hint_visible);
}

#[test]
fn scroll_hint_survives_scroll_while_loading() {
    let mut state = SearchState::default();
    state.set_query("a");
    let first = state.begin_search().unwrap();
    state.complete(first.token, Ok(vec![group("A")]));
    assert!(state.dismiss_scroll_hint());

    // Clearing the scrolled cards resets scrollLeft and fires a scroll event.
    state.set_query("b");
    let second = state.begin_search().unwrap();
    assert!(state.is_loading());
    assert!(!state.can_dismiss_scroll_hint());
    assert!(!state.dismiss_scroll_hint());
    assert!(state.scroll_hint_visible);

    assert!(state.complete(second.token, Ok(vec![group("B")])));
    assert!(state.dismiss_scroll_hint());
    assert!(!state.scroll_hint_visible);
}

#[test]
fn scroll_hint_dismisses_after_failed_search() {
    let mut state = SearchState::default();
    state.set_query("q");
    let request = state.begin_search().unwrap();
    assert!(!state.dismiss_scroll_hint());
    state.complete(request.token, Err("boom".into()));
    assert!(state.dismiss_scroll_hint());
}

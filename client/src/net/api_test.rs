use super::*;

#[test]
fn compare_endpoint_is_fixed_path() {
    assert_eq!(COMPARE_ENDPOINT, "/compare");
}

#[test]
fn compare_failed_message_formats_status() {
    assert_eq!(compare_failed_message(502, None), "compare request failed: 502");
}

#[test]
fn compare_failed_message_includes_server_detail() {
    assert_eq!(
        compare_failed_message(400, Some("query must not be empty")),
        "compare request failed: 400 (query must not be empty)"
    );
}

#[test]
fn compare_failed_message_skips_blank_detail() {
    assert_eq!(compare_failed_message(500, Some("   ")), "compare request failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_comparison_is_unavailable_outside_browser() {
    let result = block_on_ready(fetch_comparison("foo"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Drive a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}

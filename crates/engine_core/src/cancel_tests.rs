use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn fresh_token_is_not_cancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
    assert!(!token.poll());
}

#[test]
fn cancel_latches() {
    let token = CancelToken::new();
    token.cancel();
    assert!(token.is_cancelled());
    assert!(token.poll());
    assert!(token.poll());
}

#[test]
fn clones_share_the_flag() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn probe_fires_once_and_stays_latched() {
    // Probe reports true exactly once; the token must stay cancelled anyway.
    let fired = Arc::new(AtomicBool::new(false));
    let flag = fired.clone();
    let token = CancelToken::with_probe(move || !flag.swap(true, Ordering::SeqCst));

    assert!(token.poll());
    assert!(token.poll());
    assert!(token.is_cancelled());
}

#[test]
fn probe_that_never_fires_never_cancels() {
    let token = CancelToken::with_probe(|| false);
    assert!(!token.poll());
    assert!(!token.is_cancelled());
}

#[test]
fn default_limits_use_depth_four() {
    let limits = SearchLimits::default();
    assert_eq!(limits.depth, 4);
    assert!(!limits.cancel.is_cancelled());
}

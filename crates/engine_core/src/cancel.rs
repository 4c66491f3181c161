//! Search limits and cooperative cancellation.
//!
//! Selectors poll a shared `CancelToken` while searching so that an external
//! request (a window close, a user abort) can unwind a deep search promptly.
//! Polling is an atomic load plus an optional probe call and never blocks.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Limits that control a selector run.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves). One-ply strategies ignore it.
    pub depth: u8,
    /// Cancellation token polled during search
    pub cancel: CancelToken,
}

impl SearchLimits {
    /// Create limits with the given depth and no cancellation source.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            cancel: CancelToken::new(),
        }
    }

    /// Create limits with the given depth and cancellation token.
    pub fn with_cancel(depth: u8, cancel: CancelToken) -> Self {
        Self { depth, cancel }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

type CancelProbe = dyn Fn() -> bool + Send + Sync;

/// Cooperative cancellation signal shared between a search and its caller.
///
/// Cheaply cloneable; clones observe the same flag. A token may carry an
/// externally supplied probe ("has the window been closed?") that is
/// consulted on every `poll`. Once the flag or the probe reports
/// cancellation the token latches and every later poll returns true.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    probe: Option<Arc<CancelProbe>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            probe: None,
        }
    }

    /// Create a token backed by an external cancellation source.
    ///
    /// The probe must be non-blocking; it is called once per search ply.
    pub fn with_probe(probe: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            probe: Some(Arc::new(probe)),
        }
    }

    /// Request cancellation. A running search unwinds at its next poll.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Fast check of the latched flag, without consulting the probe.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Poll for cancellation, consulting the external probe if present.
    ///
    /// Latches when the probe fires, so later polls stay cancelled even if
    /// the probe reports false again. A token without a probe behaves as if
    /// the external source never fires.
    pub fn poll(&self) -> bool {
        if self.is_cancelled() {
            return true;
        }
        if let Some(probe) = &self.probe {
            if probe() {
                self.cancel();
                return true;
            }
        }
        false
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .field("has_probe", &self.probe.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod cancel_tests;

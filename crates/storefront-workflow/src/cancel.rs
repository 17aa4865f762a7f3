//! Teardown cancellation for in-flight workflow operations
//!
//! The original design let unmounted views keep applying state from
//! in-flight requests; here every await-heavy operation takes a
//! [`CancelToken`] and checks it before touching state again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag
///
/// Cancel once, observe everywhere; there is no un-cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a live (not cancelled) token
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation
    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been signalled
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

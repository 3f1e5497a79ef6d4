//! Cancellation for animation loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag.
///
/// Clones observe the same flag. Once cancelled a token stays cancelled.
/// A [`child`](Self::child) token is cancelled by its own `cancel()` or by
/// any ancestor's, but cancelling a child leaves the parent running.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    parent: Option<Box<CancellationToken>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new token that also observes `self`.
    pub fn child(&self) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            parent: Some(Box::new(self.clone())),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
            || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }
}

/// Cancel `token` when the process receives Ctrl+C.
///
/// This should be called once at program startup.
pub fn cancel_on_ctrlc(token: &CancellationToken) -> Result<(), ctrlc::Error> {
    let token = token.clone();
    ctrlc::set_handler(move || {
        token.cancel();
        log::info!("Received Ctrl+C, stopping animation");
    })
}

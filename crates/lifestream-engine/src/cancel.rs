//! Cooperative cancellation shared between a consumer and the driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};

/// A cloneable, one-shot cancellation request.
///
/// Cancelling sets a flag the driver checks at every tick boundary and
/// disconnects a channel the driver (and a blocked consumer) select on,
/// so a wait on either side wakes immediately. Cancellation cannot be
/// undone.
#[derive(Clone, Debug)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    /// Dropped on cancel; never sends.
    trigger: Mutex<Option<Sender<()>>>,
    signal: Receiver<()>,
}

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        let (trigger, signal) = crossbeam_channel::bounded(0);
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                trigger: Mutex::new(Some(trigger)),
                signal,
            }),
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner
            .trigger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Returns `true` once [`cancel()`](Self::cancel) has been called on
    /// any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Becomes ready (disconnected) when the token is cancelled.
    pub(crate) fn signal(&self) -> &Receiver<()> {
        &self.inner.signal
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn signal_blocks_until_cancelled() {
        let token = CancelToken::new();
        assert!(token
            .signal()
            .recv_timeout(Duration::from_millis(10))
            .is_err_and(|e| e.is_timeout()));
        token.cancel();
        assert!(token
            .signal()
            .recv_timeout(Duration::from_millis(10))
            .is_err_and(|e| e.is_disconnected()));
    }

    #[test]
    fn cancel_wakes_waiting_thread() {
        let token = CancelToken::new();
        let waiter = token.clone();
        let handle = thread::spawn(move || {
            let start = Instant::now();
            let _ = waiter.signal().recv();
            start.elapsed()
        });
        thread::sleep(Duration::from_millis(20));
        token.cancel();
        let waited = handle.join().unwrap();
        assert!(waited < Duration::from_secs(5));
    }
}

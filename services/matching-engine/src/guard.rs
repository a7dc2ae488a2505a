//! Exclusive access to shared book state
//!
//! Every read or write of queue contents goes through `ConcurrencyGuard::with`,
//! which holds the lock for the duration of the closure and releases it on
//! every exit path. A poisoned lock means a panic happened mid-mutation and
//! the queues may no longer conserve quantity; that is treated as fatal.

use std::sync::Mutex;
use tracing::error;

/// Mutex wrapper that refuses to hand out possibly half-mutated state
#[derive(Debug, Default)]
pub struct ConcurrencyGuard<T> {
    inner: Mutex<T>,
}

impl<T> ConcurrencyGuard<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Run `f` with exclusive access to the guarded value
    ///
    /// # Panics
    /// Panics if an earlier holder panicked while the lock was held. The
    /// engine must be restarted in that case.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(_) => {
                error!("Order book lock poisoned; engine state is unusable");
                panic!("order book lock poisoned by an earlier panic; restart the engine");
            }
        };
        f(&mut guard)
    }
}

//! Cancellable-subscription guard shared by the provider interfaces.

use std::sync::Mutex;

/// Handle to a live callback registration.
///
/// Cancellation is idempotent, and dropping the handle cancels. Once
/// `cancel` returns, no further callbacks are delivered through this
/// registration.
pub struct Subscription {
    teardown: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    /// Wraps a teardown closure. The closure runs at most once.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            teardown: Mutex::new(Some(Box::new(teardown))),
        }
    }

    /// Cancels the registration. Safe to call repeatedly and from any state.
    pub fn cancel(&self) {
        let teardown = self.teardown.lock().unwrap().take();
        if let Some(run) = teardown {
            run();
        }
    }

    /// Whether the registration has not been cancelled yet.
    pub fn is_active(&self) -> bool {
        self.teardown.lock().unwrap().is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

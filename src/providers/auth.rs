//! Consumed interface of the external authentication provider.

use crate::types::errors::AuthError;
use crate::types::identity::Identity;

use super::subscription::Subscription;

/// Identity-change listener.
///
/// Receives the current identity (`None` when signed out) immediately on
/// subscribe, then on every subsequent change. Stream outages arrive as
/// errors and do not end the subscription.
pub type AuthCallback = Box<dyn Fn(Result<Option<Identity>, AuthError>) + Send + Sync>;

/// Interface of the external auth provider.
pub trait AuthProvider: Send + Sync {
    /// Registers a listener for identity changes.
    fn subscribe(&self, on_change: AuthCallback) -> Subscription;
}

use serde::{Deserialize, Serialize};

/// Authenticated-session record emitted by the external auth provider.
///
/// Held only in process memory for the lifetime of the session; cleared on
/// sign-out. Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Which external identity provider issued this session
    /// (e.g. `"password"`, `"google.com"`).
    pub provider: String,
}

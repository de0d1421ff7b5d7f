use serde::{Deserialize, Serialize};

/// Derived combination of the live identity and the profile document's name
/// and avatar fields, published by the session synchronizer and consumed
/// application-wide.
///
/// Absent whenever no identity is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedUser {
    pub display_name: String,
    pub email: String,
    pub email_verified: bool,
    pub photo_url: String,
    pub uid: String,
}

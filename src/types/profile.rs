use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator between movie and TV titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// URL path segment used by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved reference to a movie or TV title, stored as a value inside the
/// profile document's bookmark collection.
///
/// Two bookmarks denote the same entry when `kind` and `id` match. The
/// trailing descriptive fields are display data captured at save time; they
/// do participate in the store's full-value match on removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub id: String,
    pub title: String,
    pub poster_path: String,
    pub vote_average: String,
}

impl Bookmark {
    /// Membership identity: `(kind, id)` only, ignoring descriptive fields.
    pub fn same_entry(&self, kind: MediaKind, id: &str) -> bool {
        self.kind == kind && self.id == id
    }
}

/// Per-user record in the external document store.
///
/// Every field defaults to empty when missing from the stored document, so a
/// sparse or legacy document still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

//! Bookmark Manager for CineShelf.
//!
//! Toggles membership of a title in the signed-in user's bookmark collection
//! and performs batch removal, issuing set mutations against the profile
//! document store. The collection itself is owned by the store; this manager
//! never caches or mutates it locally.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::providers::profile_store::ProfileStore;
use crate::types::errors::BookmarkError;
use crate::types::profile::{Bookmark, MediaKind};
use crate::types::user::MergedUser;

/// Profile document field holding the bookmark collection.
const BOOKMARKS_FIELD: &str = "bookmarks";

/// Outcome of a toggle, so the caller can reflect the change optimistically
/// and revert it if the next observed snapshot disagrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Added,
    Removed,
}

/// Trait defining bookmark mutation operations.
pub trait BookmarkManagerTrait {
    fn toggle_bookmark(
        &self,
        candidate: &Bookmark,
        currently_bookmarked: bool,
    ) -> Result<BookmarkChange, BookmarkError>;
    fn remove_many(&self, selected: &[Bookmark]) -> Result<(), BookmarkError>;
}

/// Bookmark manager bound to the published current-user value.
///
/// The watch receiver is the single source of truth for who is signed in;
/// every mutation refuses up front when it holds no user.
pub struct BookmarkManager {
    store: Arc<dyn ProfileStore>,
    current_user: watch::Receiver<Option<MergedUser>>,
}

impl BookmarkManager {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        current_user: watch::Receiver<Option<MergedUser>>,
    ) -> Self {
        Self {
            store,
            current_user,
        }
    }

    /// Pure membership scan: whether some element of `bookmarks` refers to
    /// the title with the given catalog id and media kind. Descriptive
    /// fields do not participate.
    pub fn is_bookmarked(bookmarks: &[Bookmark], id: &str, kind: MediaKind) -> bool {
        bookmarks.iter().any(|bookmark| bookmark.same_entry(kind, id))
    }

    /// The signed-in user's uid, or `Unauthenticated` when there is none.
    fn current_uid(&self) -> Result<String, BookmarkError> {
        self.current_user
            .borrow()
            .as_ref()
            .map(|user| user.uid.clone())
            .ok_or(BookmarkError::Unauthenticated)
    }

    fn encode(bookmark: &Bookmark) -> Result<serde_json::Value, BookmarkError> {
        serde_json::to_value(bookmark).map_err(|e| BookmarkError::MutationFailed(e.to_string()))
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Adds or removes `candidate` from the collection, depending on the
    /// caller's current membership flag.
    ///
    /// No read-then-write: a single set mutation is issued with the full
    /// bookmark value as the match key. The store's set semantics keep an
    /// add of a present value and a remove of an absent value from erroring
    /// or introducing duplicates.
    fn toggle_bookmark(
        &self,
        candidate: &Bookmark,
        currently_bookmarked: bool,
    ) -> Result<BookmarkChange, BookmarkError> {
        let uid = self.current_uid()?;
        let value = Self::encode(candidate)?;

        if currently_bookmarked {
            self.store
                .remove_from_set(&uid, BOOKMARKS_FIELD, value)
                .map_err(|e| BookmarkError::MutationFailed(e.to_string()))?;
            debug!(uid = %uid, id = %candidate.id, kind = %candidate.kind, "bookmark removed");
            Ok(BookmarkChange::Removed)
        } else {
            self.store
                .add_to_set(&uid, BOOKMARKS_FIELD, value)
                .map_err(|e| BookmarkError::MutationFailed(e.to_string()))?;
            debug!(uid = %uid, id = %candidate.id, kind = %candidate.kind, "bookmark added");
            Ok(BookmarkChange::Added)
        }
    }

    /// Removes every selected bookmark in one batch mutation.
    ///
    /// Returns only after the mutation completes, so the caller can clear
    /// its selection on success and keep it for retry on failure.
    fn remove_many(&self, selected: &[Bookmark]) -> Result<(), BookmarkError> {
        let uid = self.current_uid()?;
        if selected.is_empty() {
            return Ok(());
        }

        let values = selected
            .iter()
            .map(Self::encode)
            .collect::<Result<Vec<_>, _>>()?;
        self.store
            .remove_many_from_set(&uid, BOOKMARKS_FIELD, values)
            .map_err(|e| BookmarkError::MutationFailed(e.to_string()))?;
        debug!(uid = %uid, count = selected.len(), "bookmarks batch-removed");
        Ok(())
    }
}

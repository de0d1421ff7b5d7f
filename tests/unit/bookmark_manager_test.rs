//! Unit tests for the bookmark manager.
//!
//! Exercises membership scans, toggle and batch-remove mutations, the
//! unauthenticated refusal path, and failure surfacing, with the manager
//! observing the user published by a live session synchronizer.

use std::sync::Arc;

use cineshelf::managers::bookmark_manager::{
    BookmarkChange, BookmarkManager, BookmarkManagerTrait,
};
use cineshelf::managers::session_synchronizer::{SessionSynchronizer, SessionSynchronizerTrait};
use cineshelf::providers::memory::{MemoryAuthProvider, MemoryProfileStore};
use cineshelf::providers::profile_store::ProfileStore;
use cineshelf::types::errors::BookmarkError;
use cineshelf::types::identity::Identity;
use cineshelf::types::profile::{Bookmark, MediaKind, ProfileDocument};

fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_string(),
        email: format!("{}@example.com", uid),
        email_verified: true,
        display_name: None,
        photo_url: None,
        provider: "password".to_string(),
    }
}

fn bookmark(kind: MediaKind, id: &str) -> Bookmark {
    Bookmark {
        kind,
        id: id.to_string(),
        title: format!("Title {}", id),
        poster_path: format!("/p{}.jpg", id),
        vote_average: "7.5".to_string(),
    }
}

struct Fixture {
    auth: Arc<MemoryAuthProvider>,
    store: Arc<MemoryProfileStore>,
    session: SessionSynchronizer,
    manager: BookmarkManager,
}

fn setup() -> Fixture {
    let auth = Arc::new(MemoryAuthProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    store
        .put_document("user-1", &ProfileDocument::default())
        .unwrap();

    let session = SessionSynchronizer::new(auth.clone(), store.clone());
    let manager = BookmarkManager::new(store.clone(), session.subscribe());
    session.start();

    Fixture {
        auth,
        store,
        session,
        manager,
    }
}

fn stored_bookmarks(store: &MemoryProfileStore) -> Vec<Bookmark> {
    store.get_document("user-1").unwrap().unwrap().bookmarks
}

// === is_bookmarked ===

#[test]
fn test_is_bookmarked_matches_on_kind_and_id() {
    let bookmarks = vec![
        bookmark(MediaKind::Movie, "1"),
        bookmark(MediaKind::Tv, "2"),
    ];

    assert!(BookmarkManager::is_bookmarked(&bookmarks, "1", MediaKind::Movie));
    assert!(BookmarkManager::is_bookmarked(&bookmarks, "2", MediaKind::Tv));
    // Same id under the other kind is a different entry
    assert!(!BookmarkManager::is_bookmarked(&bookmarks, "1", MediaKind::Tv));
    assert!(!BookmarkManager::is_bookmarked(&bookmarks, "3", MediaKind::Movie));
}

#[test]
fn test_is_bookmarked_ignores_descriptive_fields() {
    let mut stored = bookmark(MediaKind::Movie, "1");
    stored.vote_average = "9.9".to_string();
    stored.title = "Renamed".to_string();

    assert!(BookmarkManager::is_bookmarked(
        &[stored],
        "1",
        MediaKind::Movie
    ));
}

#[test]
fn test_is_bookmarked_on_empty_collection() {
    assert!(!BookmarkManager::is_bookmarked(&[], "1", MediaKind::Movie));
}

// === toggle_bookmark ===

#[test]
fn test_unauthenticated_toggle_issues_no_write() {
    let fixture = setup();

    let result = fixture
        .manager
        .toggle_bookmark(&bookmark(MediaKind::Movie, "1"), false);

    assert!(matches!(result, Err(BookmarkError::Unauthenticated)));
    assert!(stored_bookmarks(&fixture.store).is_empty());
}

#[test]
fn test_toggle_adds_then_removes() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    let candidate = bookmark(MediaKind::Movie, "1");
    let change = fixture.manager.toggle_bookmark(&candidate, false).unwrap();
    assert_eq!(change, BookmarkChange::Added);
    assert_eq!(stored_bookmarks(&fixture.store).len(), 1);

    let change = fixture.manager.toggle_bookmark(&candidate, true).unwrap();
    assert_eq!(change, BookmarkChange::Removed);
    assert!(stored_bookmarks(&fixture.store).is_empty());
}

#[test]
fn test_double_add_keeps_single_entry() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    let candidate = bookmark(MediaKind::Tv, "2");
    fixture.manager.toggle_bookmark(&candidate, false).unwrap();
    fixture.manager.toggle_bookmark(&candidate, false).unwrap();

    let stored = stored_bookmarks(&fixture.store);
    assert_eq!(stored.len(), 1);
    assert!(BookmarkManager::is_bookmarked(&stored, "2", MediaKind::Tv));
}

#[test]
fn test_toggle_write_is_observed_by_the_live_subscription() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    fixture
        .manager
        .toggle_bookmark(&bookmark(MediaKind::Movie, "1"), false)
        .unwrap();

    // The synchronizer republishes after observing the mutation, so the
    // published user stays current without any extra read.
    assert_eq!(fixture.session.current_user().unwrap().uid, "user-1");
}

#[test]
fn test_removal_matches_on_full_value() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    let candidate = bookmark(MediaKind::Movie, "1");
    fixture.manager.toggle_bookmark(&candidate, false).unwrap();

    // The stored rating drifted upstream between bookmark time and removal
    // time; a remove keyed on the full current value no longer matches.
    let mut drifted = candidate.clone();
    drifted.vote_average = "9.9".to_string();
    fixture.manager.toggle_bookmark(&drifted, true).unwrap();
    assert_eq!(stored_bookmarks(&fixture.store).len(), 1);

    // Removing with the exact stored value succeeds.
    fixture.manager.toggle_bookmark(&candidate, true).unwrap();
    assert!(stored_bookmarks(&fixture.store).is_empty());
}

#[test]
fn test_toggle_failure_surfaces_mutation_failed() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));
    fixture.store.set_fail_writes(Some("permission denied"));

    let result = fixture
        .manager
        .toggle_bookmark(&bookmark(MediaKind::Movie, "1"), false);
    assert!(matches!(result, Err(BookmarkError::MutationFailed(_))));
}

#[test]
fn test_sign_out_revokes_mutation_access() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));
    fixture.auth.sign_out();

    let result = fixture
        .manager
        .toggle_bookmark(&bookmark(MediaKind::Movie, "1"), false);
    assert!(matches!(result, Err(BookmarkError::Unauthenticated)));
}

// === remove_many ===

#[test]
fn test_remove_many_removes_exactly_the_selection() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    let first = bookmark(MediaKind::Movie, "1");
    let second = bookmark(MediaKind::Tv, "2");
    let third = bookmark(MediaKind::Movie, "3");
    for candidate in [&first, &second, &third] {
        fixture.manager.toggle_bookmark(candidate, false).unwrap();
    }

    fixture
        .manager
        .remove_many(&[first.clone(), third.clone()])
        .unwrap();

    let stored = stored_bookmarks(&fixture.store);
    assert_eq!(stored, vec![second]);
}

#[test]
fn test_remove_many_with_empty_selection_is_noop() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));
    fixture
        .manager
        .toggle_bookmark(&bookmark(MediaKind::Movie, "1"), false)
        .unwrap();

    fixture.manager.remove_many(&[]).unwrap();
    assert_eq!(stored_bookmarks(&fixture.store).len(), 1);
}

#[test]
fn test_unauthenticated_remove_many_is_refused() {
    let fixture = setup();

    let result = fixture.manager.remove_many(&[bookmark(MediaKind::Movie, "1")]);
    assert!(matches!(result, Err(BookmarkError::Unauthenticated)));
}

#[test]
fn test_remove_many_failure_preserves_stored_collection() {
    let fixture = setup();
    fixture.auth.sign_in(identity("user-1"));

    let first = bookmark(MediaKind::Movie, "1");
    let second = bookmark(MediaKind::Tv, "2");
    for candidate in [&first, &second] {
        fixture.manager.toggle_bookmark(candidate, false).unwrap();
    }

    fixture.store.set_fail_writes(Some("network down"));
    let result = fixture.manager.remove_many(&[first, second]);
    assert!(matches!(result, Err(BookmarkError::MutationFailed(_))));

    // The failed batch left the stored collection untouched, so the caller
    // can keep its selection and retry.
    fixture.store.set_fail_writes(None);
    assert_eq!(stored_bookmarks(&fixture.store).len(), 2);
}

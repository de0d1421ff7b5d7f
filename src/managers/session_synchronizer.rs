//! Session Synchronizer for CineShelf.
//!
//! Merges two independently changing external streams (identity changes from
//! the auth provider, profile-document changes from the document store) into
//! one published current-user value consumed application-wide.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::providers::auth::AuthProvider;
use crate::providers::profile_store::ProfileStore;
use crate::providers::subscription::Subscription;
use crate::types::errors::{AuthError, StoreError};
use crate::types::identity::Identity;
use crate::types::profile::ProfileDocument;
use crate::types::user::MergedUser;

/// Lifecycle of the current sign-in cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No identity. The published user is `None`.
    LoggedOut,
    /// An identity arrived; the first document snapshot has not yet.
    AwaitingProfile,
    /// A merged user built from identity + document snapshot is published.
    LoggedIn,
}

/// Trait defining the session synchronization interface.
pub trait SessionSynchronizerTrait {
    fn start(&self);
    fn stop(&self);
    fn current_user(&self) -> Option<MergedUser>;
    fn subscribe(&self) -> watch::Receiver<Option<MergedUser>>;
    fn session_state(&self) -> SessionState;
}

/// State shared between the synchronizer and its stream callbacks.
///
/// `epoch` identifies the current sign-in cycle. Every identity event bumps
/// it, and document snapshots carry the epoch they were subscribed under, so
/// a snapshot still in flight from a torn-down subscription is discarded
/// instead of overwriting the newer cycle's published user.
struct SyncState {
    state: SessionState,
    doc_subscription: Option<Subscription>,
    epoch: u64,
}

/// Merges the identity stream and the profile-document stream into a single
/// published `Option<MergedUser>`.
///
/// The synchronizer is the only writer of the published value; consumers hold
/// read-only `watch::Receiver` handles. At most one document subscription is
/// live at any time, and the previous one is cancelled before a successor is
/// opened.
pub struct SessionSynchronizer {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn ProfileStore>,
    inner: Arc<Mutex<SyncState>>,
    publisher: Arc<watch::Sender<Option<MergedUser>>>,
    auth_subscription: Mutex<Option<Subscription>>,
}

impl SessionSynchronizer {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn ProfileStore>) -> Self {
        let (publisher, _receiver) = watch::channel(None);
        Self {
            auth,
            store,
            inner: Arc::new(Mutex::new(SyncState {
                state: SessionState::LoggedOut,
                doc_subscription: None,
                epoch: 0,
            })),
            publisher: Arc::new(publisher),
            auth_subscription: Mutex::new(None),
        }
    }

    /// Handles one identity-change event.
    ///
    /// The previous cycle's document subscription is cancelled before the
    /// next one is opened, so the old identity cannot deliver a late snapshot
    /// into the new cycle.
    fn on_identity_event(
        inner: &Arc<Mutex<SyncState>>,
        store: &Arc<dyn ProfileStore>,
        publisher: &Arc<watch::Sender<Option<MergedUser>>>,
        event: Result<Option<Identity>, AuthError>,
    ) {
        let identity = match event {
            Err(err) => {
                // Stream outage: hold the last published state.
                warn!("identity stream error: {}", err);
                return;
            }
            Ok(identity) => identity,
        };

        let epoch = {
            let mut state = inner.lock().unwrap();
            state.epoch += 1;
            if let Some(subscription) = state.doc_subscription.take() {
                subscription.cancel();
            }
            state.state = match identity {
                Some(_) => SessionState::AwaitingProfile,
                None => SessionState::LoggedOut,
            };
            state.epoch
        };

        let identity = match identity {
            Some(identity) => identity,
            None => {
                debug!("signed out, publishing no user");
                publisher.send_replace(None);
                return;
            }
        };

        debug!(uid = %identity.uid, "signed in, opening profile document subscription");

        // The subscribe call delivers the current snapshot synchronously, so
        // the shared state must not be locked around it.
        let uid = identity.uid.clone();
        let doc_subscription = {
            let inner = Arc::clone(inner);
            let publisher = Arc::clone(publisher);
            store.subscribe_document(
                &uid,
                Box::new(move |snapshot| {
                    Self::on_document_snapshot(&inner, &publisher, &identity, epoch, snapshot);
                }),
            )
        };

        let mut state = inner.lock().unwrap();
        if state.epoch == epoch {
            state.doc_subscription = Some(doc_subscription);
        } else {
            // A newer identity event started another cycle while this
            // subscription was being opened; that cycle owns the document
            // stream now and this one must not leak.
            drop(state);
            doc_subscription.cancel();
        }
    }

    /// Handles one profile-document snapshot for the cycle it was opened in.
    fn on_document_snapshot(
        inner: &Arc<Mutex<SyncState>>,
        publisher: &Arc<watch::Sender<Option<MergedUser>>>,
        identity: &Identity,
        epoch: u64,
        snapshot: Result<Option<ProfileDocument>, StoreError>,
    ) {
        let mut state = inner.lock().unwrap();
        if state.epoch != epoch {
            debug!(uid = %identity.uid, "discarding snapshot from a superseded sign-in cycle");
            return;
        }

        let document = match snapshot {
            Err(err) => {
                // Store-layer failure: hold the last published state.
                warn!(uid = %identity.uid, "profile document stream error: {}", err);
                return;
            }
            Ok(document) => document,
        };

        let merged = Self::merge(identity, document.as_ref());
        state.state = SessionState::LoggedIn;
        drop(state);
        publisher.send_replace(Some(merged));
    }

    /// Combines the identity with the document's name and avatar fields.
    /// A missing document degrades to empty name and photo fields rather
    /// than failing the session.
    fn merge(identity: &Identity, document: Option<&ProfileDocument>) -> MergedUser {
        let (display_name, photo_url) = match document {
            Some(doc) => (
                Self::compose_display_name(&doc.last_name, &doc.first_name),
                doc.avatar_url.clone(),
            ),
            None => (String::new(), String::new()),
        };
        MergedUser {
            display_name,
            email: identity.email.clone(),
            email_verified: identity.email_verified,
            photo_url,
            uid: identity.uid.clone(),
        }
    }

    /// Surname-first display name, matching what the account registration
    /// flow writes. Empty components are omitted rather than rendered as a
    /// bare separator.
    fn compose_display_name(last_name: &str, first_name: &str) -> String {
        match (last_name.is_empty(), first_name.is_empty()) {
            (true, true) => String::new(),
            (true, false) => first_name.to_string(),
            (false, true) => last_name.to_string(),
            (false, false) => format!("{} {}", last_name, first_name),
        }
    }
}

impl SessionSynchronizerTrait for SessionSynchronizer {
    /// Begins listening to identity changes. The current identity is
    /// processed immediately. Calling `start` while already running is a
    /// no-op.
    fn start(&self) {
        let mut slot = self.auth_subscription.lock().unwrap();
        if slot.is_some() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let store = Arc::clone(&self.store);
        let publisher = Arc::clone(&self.publisher);
        let subscription = self.auth.subscribe(Box::new(move |event| {
            Self::on_identity_event(&inner, &store, &publisher, event);
        }));
        *slot = Some(subscription);
    }

    /// Cancels both stream subscriptions and publishes no user. Idempotent
    /// and safe to call from any state; no callbacks are delivered through
    /// the cancelled subscriptions after this returns.
    fn stop(&self) {
        if let Some(subscription) = self.auth_subscription.lock().unwrap().take() {
            subscription.cancel();
        }

        let mut state = self.inner.lock().unwrap();
        state.epoch += 1;
        if let Some(subscription) = state.doc_subscription.take() {
            subscription.cancel();
        }
        state.state = SessionState::LoggedOut;
        drop(state);
        self.publisher.send_replace(None);
    }

    /// The currently published user, if any.
    fn current_user(&self) -> Option<MergedUser> {
        self.publisher.borrow().clone()
    }

    /// A read-only handle observing the published user value.
    fn subscribe(&self) -> watch::Receiver<Option<MergedUser>> {
        self.publisher.subscribe()
    }

    fn session_state(&self) -> SessionState {
        self.inner.lock().unwrap().state
    }
}

impl Drop for SessionSynchronizer {
    fn drop(&mut self) {
        self.stop();
    }
}

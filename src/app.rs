//! App Core for CineShelf.
//!
//! Central struct holding the providers, managers, and services, managing
//! application lifecycle.

use std::sync::Arc;

use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::session_synchronizer::SessionSynchronizer;
use crate::providers::auth::AuthProvider;
use crate::providers::profile_store::ProfileStore;
use crate::services::catalog_client::CatalogClient;
use crate::services::config_engine::ConfigEngine;
use crate::services::genre_cache::GenreCache;

/// Central application struct holding all managers and services.
///
/// The auth provider and profile store are injected, so the demo binary and
/// the test suite can wire in the in-process implementations while a real
/// deployment wires in the hosted ones.
pub struct App {
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn ProfileStore>,
    pub config_engine: ConfigEngine,
    pub session: SessionSynchronizer,
    pub bookmarks: BookmarkManager,
    pub catalog: CatalogClient,
    pub genre_cache: GenreCache,
}

impl App {
    /// Creates a new App, initializing all managers and services.
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn ProfileStore>,
        config_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        use crate::managers::session_synchronizer::SessionSynchronizerTrait;
        use crate::services::config_engine::ConfigEngineTrait;

        let mut config_engine = ConfigEngine::new(config_path);
        config_engine
            .load()
            .map_err(|e| format!("Config load failed: {}", e))?;

        let session = SessionSynchronizer::new(Arc::clone(&auth), Arc::clone(&store));
        let bookmarks = BookmarkManager::new(Arc::clone(&store), session.subscribe());

        let config = config_engine.config();
        let catalog = CatalogClient::new(&config.api_base_url, &config.api_token)
            .map_err(|e| format!("Catalog client init failed: {}", e))?;
        let genre_cache = GenreCache::new(&config.cache_dir);

        Ok(Self {
            auth,
            store,
            config_engine,
            session,
            bookmarks,
            catalog,
            genre_cache,
        })
    }

    /// Startup sequence: begin identity/profile synchronization.
    pub fn startup(&self) {
        use crate::managers::session_synchronizer::SessionSynchronizerTrait;
        self.session.start();
    }

    /// Shutdown sequence: stop synchronization, releasing both stream
    /// subscriptions.
    pub fn shutdown(&self) {
        use crate::managers::session_synchronizer::SessionSynchronizerTrait;
        self.session.stop();
    }
}

//! CineShelf — a movie/TV catalog browser with cloud-synced bookmarks.
//!
//! Entry point: runs a console demo exercising every component against the
//! in-process auth provider and profile store. Live catalog requests are
//! attempted only when an API token is configured.

use std::sync::Arc;

use cineshelf::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use cineshelf::managers::session_synchronizer::{
    SessionState, SessionSynchronizer, SessionSynchronizerTrait,
};
use cineshelf::providers::memory::{MemoryAuthProvider, MemoryProfileStore};
use cineshelf::providers::profile_store::ProfileStore;
use cineshelf::types::identity::Identity;
use cineshelf::types::profile::{Bookmark, MediaKind, ProfileDocument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               CineShelf v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Movie/TV catalog browser with cloud-synced bookmarks   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_config();
    demo_profile_store();
    demo_session_synchronizer();
    demo_bookmarks();
    demo_query_composer();
    demo_genre_cache();
    demo_catalog_client().await;
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_identity() -> Identity {
    Identity {
        uid: "user-1".to_string(),
        email: "ana@example.com".to_string(),
        email_verified: true,
        display_name: None,
        photo_url: None,
        provider: "password".to_string(),
    }
}

fn demo_document() -> ProfileDocument {
    ProfileDocument {
        first_name: "Ana".to_string(),
        last_name: "Diaz".to_string(),
        avatar_url: "https://example.com/avatar.png".to_string(),
        bookmarks: Vec::new(),
    }
}

fn demo_bookmark(id: &str, kind: MediaKind, title: &str) -> Bookmark {
    Bookmark {
        kind,
        id: id.to_string(),
        title: title.to_string(),
        poster_path: format!("/poster-{}.jpg", id),
        vote_average: "8.1".to_string(),
    }
}

fn demo_config() {
    use cineshelf::services::config_engine::{ConfigEngine, ConfigEngineTrait};
    section("Config Engine");

    let mut engine = ConfigEngine::new(Some("demo_config.json".to_string()));
    let config = engine.load().unwrap();
    println!("  API base URL: {}", config.api_base_url);
    println!("  Cache dir: {}", config.cache_dir);
    println!("  Token configured: {}", !config.api_token.is_empty());

    engine.save().unwrap();
    println!("  Saved to: {}", engine.config_path());
    let _ = std::fs::remove_file("demo_config.json");
    println!("  ✓ ConfigEngine OK");
    println!();
}

fn demo_profile_store() {
    section("Profile Store (set semantics)");

    let store = MemoryProfileStore::new();
    store.put_document("user-1", &demo_document()).unwrap();
    println!("  Seeded profile document for user-1");

    let value = serde_json::to_value(demo_bookmark("603", MediaKind::Movie, "The Matrix")).unwrap();
    store.add_to_set("user-1", "bookmarks", value.clone()).unwrap();
    store.add_to_set("user-1", "bookmarks", value.clone()).unwrap();
    let doc = store.get_document("user-1").unwrap().unwrap();
    println!("  Added the same bookmark twice, stored count = {}", doc.bookmarks.len());

    store.remove_from_set("user-1", "bookmarks", value.clone()).unwrap();
    store.remove_from_set("user-1", "bookmarks", value).unwrap();
    let doc = store.get_document("user-1").unwrap().unwrap();
    println!("  Removed it twice (second is a no-op), count = {}", doc.bookmarks.len());
    println!("  ✓ MemoryProfileStore OK");
    println!();
}

fn demo_session_synchronizer() {
    section("Session Synchronizer");

    let auth = Arc::new(MemoryAuthProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    store.put_document("user-1", &demo_document()).unwrap();

    let session = SessionSynchronizer::new(auth.clone(), store.clone());
    session.start();
    println!("  Started: state = {:?}", session.session_state());

    auth.sign_in(demo_identity());
    let user = session.current_user().unwrap();
    println!("  Signed in: display name = \"{}\"", user.display_name);
    println!("  Email: {} (verified={})", user.email, user.email_verified);
    println!("  Document watchers: {}", store.watcher_count("user-1"));

    auth.sign_in(demo_identity());
    println!("  Repeated sign-in: watchers still = {}", store.watcher_count("user-1"));

    auth.sign_out();
    println!("  Signed out: user = {:?}, state = {:?}", session.current_user(), session.session_state());
    assert_eq!(session.session_state(), SessionState::LoggedOut);

    session.stop();
    println!("  Stopped: auth listeners = {}", auth.listener_count());
    println!("  ✓ SessionSynchronizer OK");
    println!();
}

fn demo_bookmarks() {
    section("Bookmark Manager");

    let auth = Arc::new(MemoryAuthProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    store.put_document("user-1", &demo_document()).unwrap();

    let session = SessionSynchronizer::new(auth.clone(), store.clone());
    let manager = BookmarkManager::new(store.clone(), session.subscribe());
    session.start();

    let matrix = demo_bookmark("603", MediaKind::Movie, "The Matrix");
    let refused = manager.toggle_bookmark(&matrix, false);
    println!("  Toggle while signed out: {}", refused.unwrap_err());

    auth.sign_in(demo_identity());
    manager.toggle_bookmark(&matrix, false).unwrap();
    let office = demo_bookmark("2316", MediaKind::Tv, "The Office");
    manager.toggle_bookmark(&office, false).unwrap();
    let doc = store.get_document("user-1").unwrap().unwrap();
    println!("  Added 2 bookmarks, stored count = {}", doc.bookmarks.len());
    println!(
        "  is_bookmarked(603, movie) = {}",
        BookmarkManager::is_bookmarked(&doc.bookmarks, "603", MediaKind::Movie)
    );

    manager.toggle_bookmark(&matrix, true).unwrap();
    let doc = store.get_document("user-1").unwrap().unwrap();
    println!("  Toggled one off, count = {}", doc.bookmarks.len());

    manager.remove_many(&doc.bookmarks).unwrap();
    let doc = store.get_document("user-1").unwrap().unwrap();
    println!("  Batch-removed the rest, count = {}", doc.bookmarks.len());

    session.stop();
    println!("  ✓ BookmarkManager OK");
    println!();
}

fn demo_query_composer() {
    use cineshelf::services::catalog_query::{CatalogQuery, SortOrder};
    section("Catalog Query Composer");

    let query = CatalogQuery::new(MediaKind::Movie)
        .page(2)
        .sort(SortOrder::NewestFirst)
        .genre(28)
        .year(1999)
        .min_rating(7.0);
    println!("  Movie discovery params:");
    for (key, value) in query.to_params() {
        println!("    {} = {}", key, value);
    }

    let tv_params = CatalogQuery::new(MediaKind::Tv)
        .sort(SortOrder::NewestFirst)
        .year(2008)
        .to_params();
    println!("  TV date params use first_air_date fields:");
    for (key, value) in tv_params {
        println!("    {} = {}", key, value);
    }
    println!("  ✓ CatalogQuery OK");
    println!();
}

fn demo_genre_cache() {
    use cineshelf::services::genre_cache::{GenreCache, GenreCacheTrait};
    use cineshelf::types::catalog::Genre;
    section("Genre Cache");

    let dir = std::env::temp_dir().join("cineshelf-demo-cache");
    let cache = GenreCache::new(&dir);

    let genres = vec![
        Genre { id: 28, name: "Action".to_string() },
        Genre { id: 18, name: "Drama".to_string() },
    ];
    cache.store(MediaKind::Movie, &genres).unwrap();
    println!("  Stored {} movie genres at {:?}", genres.len(), cache.cache_path(MediaKind::Movie));

    let loaded = cache.load(MediaKind::Movie).unwrap().unwrap();
    println!("  Loaded back: {:?}", loaded.iter().map(|g| &g.name).collect::<Vec<_>>());

    let missing = cache.load(MediaKind::Tv).unwrap();
    println!("  TV cache not written yet: {:?}", missing);

    cache.clear(MediaKind::Movie).unwrap();
    let _ = std::fs::remove_dir(&dir);
    println!("  ✓ GenreCache OK");
    println!();
}

async fn demo_catalog_client() {
    use cineshelf::services::catalog_client::CatalogClient;
    use cineshelf::services::catalog_query::CatalogQuery;
    section("Catalog Client");

    let token = std::env::var("CINESHELF_API_TOKEN").unwrap_or_default();
    let client = CatalogClient::new("https://api.themoviedb.org/3", &token).unwrap();
    println!("  Base URL: {}", client.base_url());
    println!("  Discover endpoint: {}", client.endpoint_url("discover/movie"));

    if token.is_empty() {
        println!("  No CINESHELF_API_TOKEN set, skipping live requests");
    } else {
        match client.discover(&CatalogQuery::new(MediaKind::Movie)).await {
            Ok(page) => println!("  Discovered {} titles (page {})", page.results.len(), page.page),
            Err(e) => println!("  Live request failed: {}", e),
        }
    }
    println!("  ✓ CatalogClient OK");
    println!();
}

fn demo_app_core() {
    use cineshelf::app::App;
    section("App Core (full lifecycle)");

    let auth = Arc::new(MemoryAuthProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    store.put_document("user-1", &demo_document()).unwrap();

    let app = App::new(auth.clone(), store, Some("demo_app_config.json".to_string())).unwrap();
    println!("  Initialized App with injected providers");

    app.startup();
    auth.sign_in(demo_identity());
    println!("  Startup + sign-in: current user = \"{}\"",
        app.session.current_user().map(|u| u.display_name).unwrap_or_default());

    app.shutdown();
    println!("  Shutdown: user = {:?}", app.session.current_user());
    let _ = std::fs::remove_file("demo_app_config.json");
    println!("  ✓ App Core OK");
}

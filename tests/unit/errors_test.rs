use cineshelf::types::errors::*;

// === AuthError Tests ===

#[test]
fn auth_error_unavailable_display() {
    let err = AuthError::Unavailable("provider outage".to_string());
    assert_eq!(err.to_string(), "Auth provider unavailable: provider outage");
}

#[test]
fn auth_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(AuthError::Unavailable("outage".to_string()));
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::DocumentNotFound("user-1".to_string()).to_string(),
        "Profile document not found: user-1"
    );
    assert_eq!(
        StoreError::WriteRejected("permission denied".to_string()).to_string(),
        "Profile store rejected write: permission denied"
    );
    assert_eq!(
        StoreError::NetworkError("connection reset".to_string()).to_string(),
        "Profile store network error: connection reset"
    );
    assert_eq!(
        StoreError::SerializationError("bad field".to_string()).to_string(),
        "Profile store serialization error: bad field"
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_unauthenticated_display() {
    assert_eq!(
        BookmarkError::Unauthenticated.to_string(),
        "Must be signed in to modify bookmarks"
    );
}

#[test]
fn bookmark_error_mutation_failed_display() {
    assert_eq!(
        BookmarkError::MutationFailed("write rejected".to_string()).to_string(),
        "Bookmark mutation failed: write rejected"
    );
}

// === CatalogError Tests ===

#[test]
fn catalog_error_display_variants() {
    assert_eq!(
        CatalogError::NetworkError("timeout".to_string()).to_string(),
        "Catalog network error: timeout"
    );
    assert_eq!(
        CatalogError::ApiError("discover/movie returned 404".to_string()).to_string(),
        "Catalog API error: discover/movie returned 404"
    );
    assert_eq!(
        CatalogError::ParseError("missing field id".to_string()).to_string(),
        "Catalog parse error: missing field id"
    );
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::IoError("file busy".to_string()).to_string(),
        "Config I/O error: file busy"
    );
    assert_eq!(
        ConfigError::SerializationError("bad json".to_string()).to_string(),
        "Config serialization error: bad json"
    );
}

// === CacheError Tests ===

#[test]
fn cache_error_display_variants() {
    assert_eq!(
        CacheError::IoError("disk full".to_string()).to_string(),
        "Genre cache I/O error: disk full"
    );
    assert_eq!(
        CacheError::SerializationError("truncated".to_string()).to_string(),
        "Genre cache serialization error: truncated"
    );
}

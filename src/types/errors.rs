use std::fmt;

// === AuthError ===

/// Errors surfaced by the identity stream.
#[derive(Debug)]
pub enum AuthError {
    /// The auth provider is unreachable or its stream reported a failure.
    Unavailable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unavailable(msg) => write!(f, "Auth provider unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === StoreError ===

/// Errors surfaced by the external profile document store.
#[derive(Debug)]
pub enum StoreError {
    /// No document exists for the given key where one is required.
    DocumentNotFound(String),
    /// The store rejected a write (permission, conflict, quota).
    WriteRejected(String),
    /// A network error occurred while talking to the store.
    NetworkError(String),
    /// A stored document or value could not be encoded or decoded.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DocumentNotFound(key) => {
                write!(f, "Profile document not found: {}", key)
            }
            StoreError::WriteRejected(msg) => {
                write!(f, "Profile store rejected write: {}", msg)
            }
            StoreError::NetworkError(msg) => {
                write!(f, "Profile store network error: {}", msg)
            }
            StoreError::SerializationError(msg) => {
                write!(f, "Profile store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === BookmarkError ===

/// Errors related to bookmark mutation operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// A mutation was attempted with no signed-in user.
    Unauthenticated,
    /// The store rejected the mutation; the caller may retry or revert.
    MutationFailed(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Unauthenticated => {
                write!(f, "Must be signed in to modify bookmarks")
            }
            BookmarkError::MutationFailed(msg) => {
                write!(f, "Bookmark mutation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}

// === CatalogError ===

/// Errors related to catalog API requests.
#[derive(Debug)]
pub enum CatalogError {
    /// A network error occurred while communicating with the catalog API.
    NetworkError(String),
    /// The catalog API returned a non-success status.
    ApiError(String),
    /// The response body could not be decoded.
    ParseError(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NetworkError(msg) => write!(f, "Catalog network error: {}", msg),
            CatalogError::ApiError(msg) => write!(f, "Catalog API error: {}", msg),
            CatalogError::ParseError(msg) => write!(f, "Catalog parse error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

// === ConfigError ===

/// Errors related to configuration loading and saving.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the configuration.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// === CacheError ===

/// Errors related to the local genre cache.
#[derive(Debug)]
pub enum CacheError {
    /// An I/O error occurred while reading or writing a cache file.
    IoError(String),
    /// A cache file could not be serialized or deserialized.
    SerializationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::IoError(msg) => write!(f, "Genre cache I/O error: {}", msg),
            CacheError::SerializationError(msg) => {
                write!(f, "Genre cache serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CacheError {}

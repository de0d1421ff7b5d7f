//! Genre cache for CineShelf.
//!
//! Persists the movie and TV genre lists as two local JSON files, written
//! after the first successful genre fetch and read back by the filter UIs.
//! The session and bookmark logic does not depend on this cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::catalog::Genre;
use crate::types::errors::CacheError;
use crate::types::profile::MediaKind;

/// Trait defining the genre cache interface.
pub trait GenreCacheTrait {
    fn store(&self, kind: MediaKind, genres: &[Genre]) -> Result<(), CacheError>;
    fn load(&self, kind: MediaKind) -> Result<Option<Vec<Genre>>, CacheError>;
    fn clear(&self, kind: MediaKind) -> Result<(), CacheError>;
    fn cache_path(&self, kind: MediaKind) -> PathBuf;
}

/// Genre cache backed by one JSON file per media kind.
pub struct GenreCache {
    dir: PathBuf,
}

impl GenreCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn file_name(kind: MediaKind) -> &'static str {
        match kind {
            MediaKind::Movie => "movie_genres.json",
            MediaKind::Tv => "tv_genres.json",
        }
    }
}

impl GenreCacheTrait for GenreCache {
    /// Writes the genre list for `kind`, creating the cache directory if
    /// needed and replacing any previous list.
    fn store(&self, kind: MediaKind, genres: &[Genre]) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| CacheError::IoError(format!("Failed to create cache directory: {}", e)))?;

        let json = serde_json::to_string_pretty(genres)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;

        fs::write(self.cache_path(kind), json)
            .map_err(|e| CacheError::IoError(format!("Failed to write cache file: {}", e)))?;
        Ok(())
    }

    /// Reads the cached genre list for `kind`. A missing file is `None`;
    /// a malformed file is an error.
    fn load(&self, kind: MediaKind) -> Result<Option<Vec<Genre>>, CacheError> {
        let path = self.cache_path(kind);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| CacheError::IoError(format!("Failed to read cache file: {}", e)))?;
        let genres: Vec<Genre> = serde_json::from_str(&content)
            .map_err(|e| CacheError::SerializationError(format!("Malformed cache file: {}", e)))?;
        Ok(Some(genres))
    }

    /// Removes the cached list for `kind`. Removing an absent file is a
    /// no-op.
    fn clear(&self, kind: MediaKind) -> Result<(), CacheError> {
        match fs::remove_file(self.cache_path(kind)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::IoError(format!(
                "Failed to remove cache file: {}",
                e
            ))),
        }
    }

    fn cache_path(&self, kind: MediaKind) -> PathBuf {
        self.dir.join(Self::file_name(kind))
    }
}

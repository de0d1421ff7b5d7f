// CineShelf service modules
// Services cover the catalog API surface and local persistence concerns.

pub mod catalog_client;
pub mod catalog_query;
pub mod config_engine;
pub mod genre_cache;

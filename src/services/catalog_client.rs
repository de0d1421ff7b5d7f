//! Catalog API client for CineShelf.
//!
//! Async HTTP client for the external movie-metadata API: bearer-token
//! authenticated JSON GETs. The API is a stable external contract; this
//! client only shapes requests and decodes responses.

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::services::catalog_query::CatalogQuery;
use crate::types::catalog::{Credits, Genre, GenreList, Page, Review, TitleDetails, TitleSummary};
use crate::types::errors::CatalogError;
use crate::types::profile::MediaKind;

/// Timeout applied to every catalog request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the catalog metadata API.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for the API at `base_url`, authenticating every
    /// request with the given bearer token.
    pub fn new(base_url: &str, api_token: &str) -> Result<Self, CatalogError> {
        let mut headers = header::HeaderMap::new();
        let bearer = header::HeaderValue::from_str(&format!("Bearer {}", api_token))
            .map_err(|e| CatalogError::ApiError(format!("Invalid API token: {}", e)))?;
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for an API path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, CatalogError> {
        let url = self.endpoint_url(path);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ApiError(format!(
                "{} returned {}",
                path, status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    /// One page of titles matching the composed discovery query.
    pub async fn discover(&self, query: &CatalogQuery) -> Result<Page<TitleSummary>, CatalogError> {
        self.get_json(&format!("discover/{}", query.kind()), &query.to_params())
            .await
    }

    /// Free-text title search.
    pub async fn search(
        &self,
        kind: MediaKind,
        text: &str,
        page: u32,
    ) -> Result<Page<TitleSummary>, CatalogError> {
        let params = vec![
            ("query".to_string(), text.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        self.get_json(&format!("search/{}", kind), &params).await
    }

    /// Full details for one title.
    pub async fn details(&self, kind: MediaKind, id: u64) -> Result<TitleDetails, CatalogError> {
        self.get_json(&format!("{}/{}", kind, id), &[]).await
    }

    /// Cast listing for one title.
    pub async fn credits(&self, kind: MediaKind, id: u64) -> Result<Credits, CatalogError> {
        self.get_json(&format!("{}/{}/credits", kind, id), &[]).await
    }

    /// One page of user reviews for a title.
    pub async fn reviews(
        &self,
        kind: MediaKind,
        id: u64,
        page: u32,
    ) -> Result<Page<Review>, CatalogError> {
        let params = vec![("page".to_string(), page.to_string())];
        self.get_json(&format!("{}/{}/reviews", kind, id), &params)
            .await
    }

    /// One page of titles similar to the given one.
    pub async fn similar(
        &self,
        kind: MediaKind,
        id: u64,
        page: u32,
    ) -> Result<Page<TitleSummary>, CatalogError> {
        let params = vec![("page".to_string(), page.to_string())];
        self.get_json(&format!("{}/{}/similar", kind, id), &params)
            .await
    }

    /// Full genre list for the given media kind.
    pub async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>, CatalogError> {
        let list: GenreList = self.get_json(&format!("genre/{}/list", kind), &[]).await?;
        Ok(list.genres)
    }
}

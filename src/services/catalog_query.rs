//! Catalog Query Composer for CineShelf.
//!
//! Builds the filter, sort, and pagination parameters for catalog discovery
//! requests. Pure data shaping; the HTTP layer lives in the catalog client.

use crate::types::profile::MediaKind;

/// Sort orders accepted by the discovery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PopularityDesc,
    RatingDesc,
    NewestFirst,
}

impl SortOrder {
    /// Wire value for the given media kind. The date-sort field differs
    /// between movies and TV shows.
    fn as_param(&self, kind: MediaKind) -> &'static str {
        match (self, kind) {
            (SortOrder::PopularityDesc, _) => "popularity.desc",
            (SortOrder::RatingDesc, _) => "vote_average.desc",
            (SortOrder::NewestFirst, MediaKind::Movie) => "primary_release_date.desc",
            (SortOrder::NewestFirst, MediaKind::Tv) => "first_air_date.desc",
        }
    }
}

/// Builder for discovery request parameters.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    kind: MediaKind,
    page: u32,
    sort: SortOrder,
    genre: Option<u32>,
    year: Option<u32>,
    min_rating: Option<f64>,
}

impl CatalogQuery {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            page: 1,
            sort: SortOrder::PopularityDesc,
            genre: None,
            year: None,
            min_rating: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn genre(mut self, genre_id: u32) -> Self {
        self.genre = Some(genre_id);
        self
    }

    /// Release year for movies, first-air year for TV shows.
    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Wire query pairs for the discovery endpoint.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("sort_by".to_string(), self.sort.as_param(self.kind).to_string()),
        ];

        if let Some(genre) = self.genre {
            params.push(("with_genres".to_string(), genre.to_string()));
        }
        if let Some(year) = self.year {
            let field = match self.kind {
                MediaKind::Movie => "primary_release_year",
                MediaKind::Tv => "first_air_date_year",
            };
            params.push((field.to_string(), year.to_string()));
        }
        if let Some(rating) = self.min_rating {
            params.push(("vote_average.gte".to_string(), rating.to_string()));
        }

        params
    }
}

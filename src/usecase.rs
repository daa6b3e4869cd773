//! Fetch orchestration — the use-case layer.
//!
//! [`BoxOfficeUseCase`] sequences one repository call per operation, applies
//! the pure entity mappers, and normalizes every failure source into
//! [`DomainError`]. It owns no state between calls and is safe to invoke
//! repeatedly and concurrently; run sequencing and cancellation live in
//! [`crate::coordinator`], not here.

use crate::error::{DomainError, Result};
use crate::repository::MovieRepository;
use crate::types::{BoxOfficeMovie, MovieDetail, MovieId};
use std::sync::Arc;

/// Stateless orchestrator for the two dependent fetch operations
#[derive(Clone)]
pub struct BoxOfficeUseCase {
    repository: Arc<dyn MovieRepository>,
}

impl BoxOfficeUseCase {
    /// Create a use case over a repository boundary
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    /// Fetch and map the daily ranked list
    ///
    /// On transport failure the domain mapping is applied and returned
    /// immediately. On success every raw record is mapped to its entity;
    /// a record that cannot be mapped classifies the whole result as
    /// [`DomainError::DataUnavailable`] rather than panicking or silently
    /// dropping the record. An empty list is a valid zero-item success.
    pub async fn fetch_list(&self) -> Result<Vec<BoxOfficeMovie>> {
        let payload = match self.repository.get_ranked_list().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "ranked list fetch failed");
                return Err(DomainError::from(&e));
            }
        };

        let records = payload.box_office_result.daily_box_office_list;
        let mut movies = Vec::with_capacity(records.len());
        for record in &records {
            match record.to_entity() {
                Ok(movie) => movies.push(movie),
                Err(e) => {
                    tracing::warn!(movie_cd = %record.movie_cd, error = %e, "ranked list record could not be mapped");
                    return Err(DomainError::from(e));
                }
            }
        }

        tracing::debug!(count = movies.len(), "ranked list fetched");
        Ok(movies)
    }

    /// Fetch and map supplementary detail for one movie
    pub async fn fetch_detail(&self, id: &MovieId) -> Result<MovieDetail> {
        match self.repository.get_detail(id).await {
            Ok(payload) => {
                let detail = payload.movie_info_result.movie_info.to_entity();
                tracing::debug!(movie_id = %id, title = %detail.title, "movie detail fetched");
                Ok(detail)
            }
            Err(e) => {
                tracing::warn!(movie_id = %id, error = %e, "movie detail fetch failed");
                Err(DomainError::from(&e))
            }
        }
    }
}

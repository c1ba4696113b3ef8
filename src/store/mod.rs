//! Storage seams for surveys and their responses.
//!
//! Handlers only see the two traits below. `PgStore` backs the running
//! service; `MemoryStore` keeps everything in process memory and is what the
//! integration tests run against.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Survey, SurveyResponse};

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "{err}"),
            StoreError::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persist new markup under a freshly assigned id.
    async fn create(&self, html: &str) -> Result<Survey, StoreError>;

    /// `Ok(None)` when no survey has this id.
    async fn get(&self, id: Uuid) -> Result<Option<Survey>, StoreError>;

    /// All surveys, oldest first.
    async fn list(&self) -> Result<Vec<Survey>, StoreError>;
}

/// Responses reference their survey by id. Implementations do not check that
/// the survey exists; handlers look it up first.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    async fn create(
        &self,
        survey_id: Uuid,
        data: serde_json::Value,
    ) -> Result<SurveyResponse, StoreError>;

    async fn count_for(&self, survey_id: Uuid) -> Result<i64, StoreError>;

    /// Responses for one survey, oldest first.
    async fn list_for(&self, survey_id: Uuid) -> Result<Vec<SurveyResponse>, StoreError>;
}

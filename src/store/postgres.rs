use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ResponseStore, StoreError, SurveyStore};
use crate::db;
use crate::models::{Survey, SurveyResponse};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyStore for PgStore {
    async fn create(&self, html: &str) -> Result<Survey, StoreError> {
        Ok(db::surveys::create(&self.pool, Uuid::now_v7(), html).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Survey>, StoreError> {
        Ok(db::surveys::find_by_id(&self.pool, id).await?)
    }

    async fn list(&self) -> Result<Vec<Survey>, StoreError> {
        Ok(db::surveys::list(&self.pool).await?)
    }
}

#[async_trait]
impl ResponseStore for PgStore {
    async fn create(
        &self,
        survey_id: Uuid,
        data: serde_json::Value,
    ) -> Result<SurveyResponse, StoreError> {
        Ok(db::responses::create(&self.pool, Uuid::now_v7(), survey_id, &data).await?)
    }

    async fn count_for(&self, survey_id: Uuid) -> Result<i64, StoreError> {
        Ok(db::responses::count_by_survey(&self.pool, survey_id).await?)
    }

    async fn list_for(&self, survey_id: Uuid) -> Result<Vec<SurveyResponse>, StoreError> {
        Ok(db::responses::list_by_survey(&self.pool, survey_id).await?)
    }
}

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{ResponseStore, StoreError, SurveyStore};
use crate::models::{Survey, SurveyResponse};

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    surveys: DashMap<Uuid, Survey>,
    /// survey_id -> responses in arrival order
    responses: DashMap<Uuid, Vec<SurveyResponse>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn create(&self, html: &str) -> Result<Survey, StoreError> {
        let survey = Survey {
            id: Uuid::now_v7(),
            html: html.to_string(),
            created_at: Utc::now(),
        };
        self.surveys.insert(survey.id, survey.clone());
        Ok(survey)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Survey>, StoreError> {
        Ok(self.surveys.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Survey>, StoreError> {
        let mut surveys: Vec<Survey> = self
            .surveys
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // v7 ids sort in creation order
        surveys.sort_by_key(|s| s.id);
        Ok(surveys)
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn create(
        &self,
        survey_id: Uuid,
        data: serde_json::Value,
    ) -> Result<SurveyResponse, StoreError> {
        let response = SurveyResponse {
            id: Uuid::now_v7(),
            survey_id,
            data,
            created_at: Utc::now(),
        };
        self.responses
            .entry(survey_id)
            .or_default()
            .push(response.clone());
        Ok(response)
    }

    async fn count_for(&self, survey_id: Uuid) -> Result<i64, StoreError> {
        Ok(self
            .responses
            .get(&survey_id)
            .map(|entry| entry.len() as i64)
            .unwrap_or(0))
    }

    async fn list_for(&self, survey_id: Uuid) -> Result<Vec<SurveyResponse>, StoreError> {
        Ok(self
            .responses
            .get(&survey_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}

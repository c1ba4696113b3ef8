use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Survey, SurveyResponse};
use crate::state::{AppState, SharedState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub id: Uuid,
    pub responses: i64,
    pub link: String,
    pub responses_link: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ResponseList {
    pub responses: Vec<SurveyResponse>,
}

/// Resolve a path id to a stored survey. Ids that do not parse cannot exist,
/// so they are reported the same way as unknown ones.
pub async fn find_survey(state: &AppState, raw_id: &str) -> Result<Survey, AppError> {
    let not_found = || AppError::NotFound("Survey not found.".to_string());

    let id = Uuid::parse_str(raw_id).map_err(|_| not_found())?;
    state.surveys.get(id).await?.ok_or_else(not_found)
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<SurveySummary>>, AppError> {
    let surveys = state.surveys.list().await?;

    let mut summaries = Vec::with_capacity(surveys.len());
    for survey in surveys {
        let responses = state.responses.count_for(survey.id).await?;
        summaries.push(SurveySummary {
            id: survey.id,
            responses,
            link: survey.link(),
            responses_link: survey.responses_link(),
            created_at: survey.created_at,
        });
    }

    Ok(Json(summaries))
}

pub async fn submit_response(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(data): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let survey = find_survey(&state, &id).await?;
    let response = state.responses.create(survey.id, data).await?;

    tracing::info!(survey_id = %survey.id, response_id = %response.id, "Response recorded");
    Ok(Json(json!({ "message": "Response recorded." })))
}

pub async fn list_responses(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseList>, AppError> {
    let survey = find_survey(&state, &id).await?;
    let responses = state.responses.list_for(survey.id).await?;

    Ok(Json(ResponseList { responses }))
}

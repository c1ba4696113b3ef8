use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct PromptResponse {
    pub link: String,
}

pub async fn create_survey(
    State(state): State<SharedState>,
    Json(req): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    let html = state.generator.generate(&req.prompt).await?;
    let survey = state.surveys.create(&html).await?;

    tracing::info!(survey_id = %survey.id, "Survey created");
    Ok(Json(PromptResponse {
        link: survey.link(),
    }))
}

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::routes::surveys::find_survey;
use crate::state::SharedState;

/// Generated markup wrapped in a form that posts its fields back as JSON.
#[derive(Template)]
#[template(path = "survey.html")]
struct SurveyTemplate {
    html: String,
    submit_url: String,
}

pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let survey = match find_survey(&state, &id).await {
        Ok(survey) => survey,
        Err(AppError::NotFound(msg)) => return Ok((StatusCode::NOT_FOUND, msg).into_response()),
        Err(e) => return Err(e),
    };

    let template = SurveyTemplate {
        submit_url: format!("{}/response", survey.link()),
        html: survey.html,
    };
    let page = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render survey page: {e}")))?;

    Ok(Html(page).into_response())
}

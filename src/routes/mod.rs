pub mod auth;
pub mod prompt;
pub mod surveys;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/prompt", post(prompt::create_survey))
        .route("/api/surveys", get(surveys::list))
        .route("/survey/{id}/response", post(surveys::submit_response))
        .route("/survey/{id}/responses", get(surveys::list_responses))
}

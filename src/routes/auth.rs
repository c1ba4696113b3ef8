use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::email::templates;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    /// Accepted but neither checked nor stored.
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Sends the welcome email. No account is created.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let Some(mailer) = state.mailer.as_ref() else {
        tracing::error!("Registration failed: no mail transport configured");
        return registration_failed();
    };

    if let Err(e) = mailer.send(templates::welcome(&req.email)).await {
        tracing::error!("Registration failed: {e}");
        return registration_failed();
    }

    tracing::info!(email = %req.email, "Welcome email sent");
    (
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered and email sent.".to_string(),
        }),
    )
        .into_response()
}

fn registration_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Registration failed." })),
    )
        .into_response()
}

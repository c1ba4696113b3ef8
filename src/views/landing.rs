use askama::Template;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {}

pub async fn index() -> impl IntoResponse {
    Html(LandingTemplate {}.render().unwrap_or_default())
}

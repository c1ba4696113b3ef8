pub mod landing;
pub mod survey;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(landing::index))
        .route("/survey/{id}", get(survey::show))
}

//! Route definitions for the tutorial pages, mounted at `/tutorials`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tutorials;
use crate::state::AppState;

/// ```text
/// GET    /                          -> list_tutorials
/// GET    /new                       -> new_tutorial
/// POST   /save                      -> save_tutorial
/// GET    /{id}                      -> edit_tutorial
/// GET    /delete/{id}               -> delete_tutorial
/// GET    /{id}/published/{status}   -> update_published_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tutorials::list_tutorials))
        .route("/new", get(tutorials::new_tutorial))
        .route("/save", post(tutorials::save_tutorial))
        .route("/{id}", get(tutorials::edit_tutorial))
        .route("/delete/{id}", get(tutorials::delete_tutorial))
        .route(
            "/{id}/published/{status}",
            get(tutorials::update_published_status),
        )
}

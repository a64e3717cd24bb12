pub mod health;
pub mod tutorials;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                          redirect to /tutorials
/// /tutorials                                 list (?keyword=)
/// /tutorials/new                             create form
/// /tutorials/save                            create or update (POST form)
/// /tutorials/{id}                            edit form
/// /tutorials/delete/{id}                     delete
/// /tutorials/{id}/published/{status}         publish / unpublish
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::tutorials::index))
        .nest("/tutorials", tutorials::router())
}

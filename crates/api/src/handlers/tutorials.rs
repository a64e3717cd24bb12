//! Handlers for the tutorial catalogue pages.
//!
//! Each handler forwards to the matching [`TutorialDispatcher`] operation
//! and hands the result to the view responder.
//!
//! [`TutorialDispatcher`]: tutorials_core::dispatch::TutorialDispatcher

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{Redirect, Response};
use tutorials_core::tutorial::Tutorial;
use tutorials_core::types::DbId;
use tutorials_core::view::TUTORIALS_PATH;

use crate::error::AppResult;
use crate::extract::AppForm;
use crate::query::{KeywordParams, TutorialForm};
use crate::response::render;
use crate::state::AppState;

/// GET /
///
/// The catalogue is the landing page.
pub async fn index() -> Redirect {
    Redirect::to(TUTORIALS_PATH)
}

/// GET /tutorials?keyword=
///
/// List all tutorials, or those whose title contains `keyword`.
pub async fn list_tutorials(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<KeywordParams>,
) -> AppResult<Response> {
    let dispatch = state
        .tutorials
        .list_tutorials(params.keyword.as_deref())
        .await?;

    Ok(render(&state, &headers, dispatch))
}

/// GET /tutorials/new
pub async fn new_tutorial(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let dispatch = state.tutorials.new_tutorial_form();
    render(&state, &headers, dispatch)
}

/// POST /tutorials/save
///
/// Create (no `id`) or overwrite (with `id`) a tutorial from the form body.
/// Malformed bodies and field-constraint violations are rejected with 400
/// before anything reaches storage.
pub async fn save_tutorial(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppForm(form): AppForm<TutorialForm>,
) -> AppResult<Response> {
    let tutorial = Tutorial::try_from(form)?;
    let dispatch = state.tutorials.save_tutorial(tutorial).await?;

    Ok(render(&state, &headers, dispatch))
}

/// GET /tutorials/{id}
///
/// Edit form; redirects to the list with a message if the id is unknown.
pub async fn edit_tutorial(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let dispatch = state.tutorials.edit_tutorial_form(id).await?;

    Ok(render(&state, &headers, dispatch))
}

/// GET /tutorials/delete/{id}
pub async fn delete_tutorial(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let dispatch = state.tutorials.delete_tutorial(id).await?;

    Ok(render(&state, &headers, dispatch))
}

/// GET /tutorials/{id}/published/{status}
pub async fn update_published_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, published)): Path<(DbId, bool)>,
) -> AppResult<Response> {
    let dispatch = state.tutorials.set_published_status(id, published).await?;

    Ok(render(&state, &headers, dispatch))
}

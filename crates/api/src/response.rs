//! View responder: turns a [`Dispatch`] into an HTTP response.
//!
//! Page views render as a `{ "view": ..., "model": ... }` JSON envelope.
//! Redirects become `303 See Other` and park their flash message in the
//! [`FlashStore`](crate::flash::FlashStore) until the next page render.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use tutorials_core::view::{Dispatch, Model, View, ATTR_MESSAGE};

use crate::flash::{clear_flash_cookie, flash_id_from_headers, set_flash_cookie};
use crate::state::AppState;

/// JSON envelope for a rendered page.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// Template identifier (`tutorials`, `tutorial_form`).
    pub view: &'static str,
    pub model: Model,
}

/// Render `dispatch` for the request that carried `headers`.
pub fn render(state: &AppState, headers: &HeaderMap, dispatch: Dispatch) -> Response {
    let Dispatch {
        view,
        mut model,
        flash,
    } = dispatch;

    if let View::Redirect(target) = view {
        let mut response = Redirect::to(target).into_response();
        if let Some(message) = flash {
            let id = state.flash.push(message);
            response
                .headers_mut()
                .append(SET_COOKIE, set_flash_cookie(id));
        }
        return response;
    }

    let pending = flash_id_from_headers(headers);
    if let Some(message) = pending.and_then(|id| state.flash.take(id)) {
        model.insert(ATTR_MESSAGE, message.into_inner());
    } else if let Some(id) = pending {
        tracing::warn!(flash_id = %id, "Flash cookie without a pending message");
    }

    let mut response = Json(ViewResponse {
        view: view.id(),
        model,
    })
    .into_response();

    if pending.is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_flash_cookie());
    }

    response
}

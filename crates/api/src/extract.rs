//! Request-body extractors whose rejections use the JSON error shape.

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Request};
use axum::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// URL-encoded form body.
///
/// Same as [`axum::Form`], but a body that fails to deserialize (a missing
/// required field, a non-numeric `level`, a wrong content type) becomes
/// [`AppError::BadRequest`] instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection: FormRejection| {
                tracing::debug!(status = %rejection.status(), "Form body rejected");
                AppError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(value))
    }
}

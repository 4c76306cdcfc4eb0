//! JSON payload extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON extractor that reports any malformed body as an invalid payload.
///
/// Missing content type, syntax errors and shape mismatches (e.g. a JSON
/// array instead of an object) all reject with [`AppError::InvalidPayload`].
pub struct PayloadJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for PayloadJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected JSON body: {}", e.body_text());
            AppError::InvalidPayload
        })?;

        Ok(PayloadJson(value))
    }
}

//! `Path<T>` extractor whose rejection uses the `ApiResponse` envelope

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResponse};

pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err((
                rejection.status(),
                Json(ApiResponse::error(rejection.body_text())),
            )),
        }
    }
}

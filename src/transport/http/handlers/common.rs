use crate::domain::model::Validate;
use crate::error::{AppError, AppResult};
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::Json;
use std::num::IntErrorKind;

/// Unwraps a JSON body and checks its field constraints, before any session is opened.
pub fn validated<T: Validate>(
    request: Result<Json<T>, JsonRejection>,
) -> AppResult<(T, T::Fields)> {
    let Json(input) = request.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let fields = input.validate().map_err(AppError::Validation)?;
    Ok((input, fields))
}

/// Record id taken from the `:id` path segment.
///
/// Rejections go through `AppError`: a non-integer is 400, an integer outside the id range
/// is 404 since no record can carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidPath(e.body_text()))?;
        parse_id(&raw).map(Id)
    }
}

pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::NotFound,
        _ => AppError::InvalidPath(format!("`{}` is not an integer id", raw)),
    })
}

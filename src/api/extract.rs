use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` whose rejections (bad syntax, missing fields, wrong types) come back
/// as an [`ApiError::BadRequest`] body instead of axum's plain-text 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

use axum::extract::FromRequest;

use super::error::ApiError;

/// `Json` extractor whose rejections use the arena's `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

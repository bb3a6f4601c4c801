use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::AppError;

/// `Json` whose rejections go through `AppError`, so a bad body answers
/// with the usual `{"message"}` shape instead of axum's plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

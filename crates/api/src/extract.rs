//! Request extractors that reject with [`AppError`].
//!
//! axum's own `Json` and `Query` rejections render as `text/plain`. These
//! wrappers route them through [`AppError::BadRequest`] so malformed input
//! gets the same `{"error", "code"}` body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

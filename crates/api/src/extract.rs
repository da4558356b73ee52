//! Request extractors whose rejections are [`AppError`]s.
//!
//! Axum's stock `Json`, `Form` and `Path` reject with their own status
//! codes and plain-text bodies (415/422 and 400). These wrappers route every rejection through
//! [`AppError`] so a broken body is always a 400 and an unparseable id is
//! always a 404, with the standard JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// URL-encoded form extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct ApiForm<T>(pub T);

/// Path parameter extractor rejecting with [`AppError::RouteNotFound`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

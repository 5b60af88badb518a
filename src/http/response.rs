//! Response formatting.
//!
//! - Success bodies are café names joined by `,` (empty list → empty body)
//! - Request errors map to 400 with the error message as a plain-text body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::directory::Cafe;
use crate::http::RequestError;

/// Join café names with a bare comma.
pub fn format_names(cafes: &[&Cafe]) -> String {
    cafes
        .iter()
        .map(|cafe| cafe.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::UnknownCity | RequestError::InvalidCount => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

//! `GET /cafe` handler.
//!
//! ```text
//! ReceivedRequest → Validated → Filtered → Formatted → 200
//!                 ↘ ValidationFailed → 400
//! ```

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::directory::CityDirectory;
use crate::http::request::{CafeQuery, RequestError};
use crate::http::response::format_names;
use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;
use crate::observability::metrics;

pub async fn cafe_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let query = CafeQuery::from_pairs(pairs);

    let response = match list_cafes(&state.directory, &query) {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            tracing::debug!(
                request_id = %request_id,
                city = ?query.city,
                count = ?query.count,
                error = %e,
                "Rejected request"
            );
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start_time);
    response
}

/// Validate, filter and format. The body of a successful `/cafe` response.
pub fn list_cafes(directory: &CityDirectory, query: &CafeQuery) -> Result<String, RequestError> {
    let validated = query.validate(directory)?;
    let selected = validated.select();

    tracing::debug!(
        city = %validated.city,
        search = %validated.filter.search(),
        limit = ?validated.filter.limit(),
        matched = selected.len(),
        "Cafes selected"
    );
    metrics::record_results(selected.len());

    Ok(format_names(&selected))
}

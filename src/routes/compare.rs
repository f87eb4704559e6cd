//! Comparison route.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::ErrorBody;
use serde::Deserialize;

use crate::providers::ProviderError;
use crate::services::compare::{CompareError, compare as run_compare};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    #[serde(default)]
    pub query: String,
}

/// `GET /compare?query=...`: grouped offers for a product query.
pub async fn compare(State(state): State<AppState>, Query(params): Query<CompareParams>) -> Response {
    match run_compare(&state, &params.query).await {
        Ok(groups) => Json(groups).into_response(),
        Err(e) => {
            let status = compare_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "comparison failed");
            }
            if let CompareError::Provider(ProviderError::Status { provider, body, .. }) = &e {
                tracing::debug!(provider, body = %body, "provider error body");
            }
            (status, Json(ErrorBody { error: e.to_string() })).into_response()
        }
    }
}

pub(crate) fn compare_error_to_status(err: &CompareError) -> StatusCode {
    match err {
        CompareError::EmptyQuery => StatusCode::BAD_REQUEST,
        CompareError::Provider(_) => StatusCode::BAD_GATEWAY,
    }
}

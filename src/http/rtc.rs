// File: src/http/rtc.rs

use crate::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, instrument};

#[derive(Serialize)]
struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
struct TokenErrorResponse {
    error: String,
}

/// GET /rtc/:channel/:uid — medya kanalı için katılım token'ı üretir.
/// Issuer çağrısı sinyalleşme kilidinden bağımsızdır.
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    Path((channel, uid)): Path<(String, u32)>,
) -> Response {
    match state.token_issuer.issue_token(&channel, uid) {
        Ok(token) => Json(TokenResponse { token }).into_response(),
        Err(e) => {
            error!(error = %e, channel = %channel, "Medya token'ı üretilemedi.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TokenErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// File: src/http/call.rs

use crate::app_state::AppState;
use crate::call::{CallRecord, SignalError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub role: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AcceptRequest {
    pub role: Option<String>,
}

/// Sinyalleşme yanıt zarfı. Conflict "yumuşak hata"dır: HTTP 200 içinde
/// `success: false` ve istemcinin ekranını düzeltebilmesi için mevcut kayıt.
#[derive(Debug, Serialize)]
pub struct SignalResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CallRecord>,
}

impl SignalResponse {
    fn ok(state: CallRecord) -> Self {
        SignalResponse {
            success: true,
            message: None,
            state: Some(state),
        }
    }

    fn conflict(message: String, state: CallRecord) -> Self {
        SignalResponse {
            success: false,
            message: Some(message),
            state: Some(state),
        }
    }
}

#[derive(Serialize)]
struct InvalidInputResponse {
    error: String,
}

fn signal_result_to_response(result: Result<CallRecord, SignalError>) -> Response {
    match result {
        Ok(state) => Json(SignalResponse::ok(state)).into_response(),
        Err(SignalError::Conflict { message, state }) => {
            warn!(message = %message, "Sinyalleşme geçişi reddedildi.");
            Json(SignalResponse::conflict(message, state)).into_response()
        }
        Err(e @ SignalError::InvalidInput { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(InvalidInputResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /call/start — body: { role, to? }
pub async fn start(State(state): State<AppState>, Json(req): Json<StartRequest>) -> Response {
    let initiator = req.role.as_deref().unwrap_or("");
    let result = state.signaling.start(initiator, req.to.as_deref()).await;
    signal_result_to_response(result)
}

/// GET /call/status — mutabakat sonrası kaydın tamamı. Asla başarısız olmaz.
pub async fn status(State(state): State<AppState>) -> Json<CallRecord> {
    Json(state.signaling.status().await)
}

/// POST /call/accept — body: { role }
pub async fn accept(State(state): State<AppState>, Json(req): Json<AcceptRequest>) -> Response {
    let responder = req.role.as_deref().unwrap_or("");
    let result = state.signaling.accept(responder).await;
    signal_result_to_response(result)
}

/// POST /call/cancel — evrensel sıfırlama, gövde beklemez.
pub async fn cancel(State(state): State<AppState>) -> Json<SignalResponse> {
    let record = state.signaling.cancel().await;
    Json(SignalResponse::ok(record))
}

// azizam-call-signaling-service/src/http/mod.rs

pub mod call;
pub mod health;
pub mod rtc;

use crate::app_state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Tüm HTTP yüzeyini tek router'da toplar. CORS açıktır çünkü istemciler
/// tarayıcıdan, farklı origin'lerden geliyor.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness))
        .route("/rtc/:channel/:uid", get(rtc::issue_token))
        .route("/call/start", post(call::start))
        .route("/call/status", get(call::status))
        .route("/call/accept", post(call::accept))
        .route("/call/cancel", post(call::cancel))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

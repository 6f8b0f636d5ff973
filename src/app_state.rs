// File: src/app_state.rs
use crate::call::CallSignaling;
use crate::config::AppConfig;
use crate::media::{AgoraTokenIssuer, MediaTokenIssuer};
use std::sync::Arc;

/// Handler'lara enjekte edilen paylaşımlı durum. `CallRecord`'un kendisi
/// `CallSignaling` içindeki mutex'in arkasındadır; burada sadece Arc'lar var,
/// bu yüzden klonlamak ucuzdur.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub signaling: Arc<CallSignaling>,
    pub token_issuer: Arc<dyn MediaTokenIssuer>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let token_issuer = Arc::new(AgoraTokenIssuer::from_config(&config));
        AppState {
            config,
            signaling: Arc::new(CallSignaling::new()),
            token_issuer,
        }
    }
}

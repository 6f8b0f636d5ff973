// azizam-call-signaling-service/src/config.rs
use crate::error::ServiceError;
use std::env;
use std::fmt;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub http_listen_addr: SocketAddr,
    pub agora_app_id: Option<String>,
    pub agora_app_certificate: Option<String>,
    pub env: String,
    pub rust_log: String,
    pub service_version: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("http_listen_addr", &self.http_listen_addr)
            .field("agora_app_id", &self.agora_app_id)
            .field("agora_app_certificate", &"***REDACTED***")
            .field("env", &self.env)
            .field("service_version", &self.service_version)
            .finish()
    }
}

impl AppConfig {
    pub fn load_from_env() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();

        let port_str = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port_str.parse::<u16>()?;

        let service_version = env::var("SERVICE_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

        // Agora kimlik bilgileri başlangıçta zorunlu değil: eksiklerse servis
        // yine ayağa kalkar, sadece /rtc endpoint'i 500 döner.
        Ok(AppConfig {
            env: env::var("ENV").unwrap_or_else(|_| "production".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            service_version,
            http_listen_addr: format!("0.0.0.0:{}", port).parse()?,
            agora_app_id: env::var("AGORA_APP_ID").ok().filter(|s| !s.is_empty()),
            agora_app_certificate: env::var("AGORA_APP_CERTIFICATE")
                .ok()
                .filter(|s| !s.is_empty()),
        })
    }
}

// File: src/media/token.rs

use crate::config::AppConfig;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Token geçerlilik süresi (saniye). Sinyalleşme katmanında pazarlık yok,
/// issuer politikası sabittir.
pub const TOKEN_EXPIRE_SECS: i64 = 3600;

/// Tüm katılımcılar publisher rolüyle katılır.
const ROLE_PUBLISHER: u8 = 1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Uygulama kimliği veya sertifikası yapılandırılmamış. Sessizce geçersiz
    /// token üretmek yerine açıkça reddediyoruz.
    #[error("Agora credentials missing")]
    CredentialsUnavailable,
}

/// Medya kanalına katılım token'ı üreten dış işbirlikçi arayüzü.
/// Sinyalleşme durum makinesinden tamamen bağımsızdır; `CallRecord` kilidi
/// tutulurken asla çağrılmamalıdır.
pub trait MediaTokenIssuer: Send + Sync {
    fn issue_token(&self, channel: &str, uid: u32) -> Result<String, TokenError>;
}

/// Agora tarzı, HMAC-SHA256 imzalı kanal token'ı üreten issuer.
pub struct AgoraTokenIssuer {
    app_id: Option<String>,
    app_certificate: Option<String>,
}

impl AgoraTokenIssuer {
    pub fn from_config(config: &AppConfig) -> Self {
        AgoraTokenIssuer::new(
            config.agora_app_id.clone(),
            config.agora_app_certificate.clone(),
        )
    }

    pub fn new(app_id: Option<String>, app_certificate: Option<String>) -> Self {
        AgoraTokenIssuer {
            app_id,
            app_certificate,
        }
    }
}

impl MediaTokenIssuer for AgoraTokenIssuer {
    fn issue_token(&self, channel: &str, uid: u32) -> Result<String, TokenError> {
        let (app_id, certificate) = match (&self.app_id, &self.app_certificate) {
            (Some(id), Some(cert)) => (id, cert),
            _ => return Err(TokenError::CredentialsUnavailable),
        };

        let privilege_expire_ts = Utc::now().timestamp() + TOKEN_EXPIRE_SECS;
        let payload = format!(
            "{}:{}:{}:{}:{}",
            app_id, channel, uid, ROLE_PUBLISHER, privilege_expire_ts
        );

        let mut mac = HmacSha256::new_from_slice(certificate.as_bytes())
            .map_err(|_| TokenError::CredentialsUnavailable)?;
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "006{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_issuer() -> AgoraTokenIssuer {
        AgoraTokenIssuer::new(
            Some("test-app-id".to_string()),
            Some("test-app-certificate".to_string()),
        )
    }

    #[test]
    fn unconfigured_issuer_rejects() {
        let issuer = AgoraTokenIssuer::new(None, None);
        assert_eq!(
            issuer.issue_token("azizam", 42).unwrap_err(),
            TokenError::CredentialsUnavailable
        );

        // Tek başına app id yeterli değil.
        let half = AgoraTokenIssuer::new(Some("id".to_string()), None);
        assert!(half.issue_token("azizam", 42).is_err());
    }

    #[test]
    fn token_embeds_channel_and_uid() {
        let issuer = configured_issuer();
        let token = issuer.issue_token("azizam", 42).unwrap();

        let encoded_payload = token
            .strip_prefix("006")
            .and_then(|rest| rest.split('.').next())
            .unwrap();
        let payload = URL_SAFE_NO_PAD.decode(encoded_payload).unwrap();
        let payload = String::from_utf8(payload).unwrap();

        assert!(payload.starts_with("test-app-id:azizam:42:"));
    }

    #[test]
    fn tokens_for_different_channels_differ() {
        let issuer = configured_issuer();
        let a = issuer.issue_token("kanal-a", 1).unwrap();
        let b = issuer.issue_token("kanal-b", 1).unwrap();
        assert_ne!(a, b);
    }
}

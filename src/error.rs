// azizam-call-signaling-service/src/error.rs
use thiserror::Error;

/// Açılış (bootstrap) aşamasının hataları. Sinyalleşme ve token hataları
/// kendi modüllerinde, alana özel enum'larla taşınır.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Geçersiz PORT değeri: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),

    #[error("Dinleme adresi kurulamadı: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),
}

// File: src/http/health.rs

/// Basit canlılık kontrolü; yük dengeleyici ve istemciler için.
pub async fn liveness() -> &'static str {
    "Azizam backend is running ❤️"
}

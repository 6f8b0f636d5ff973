// File: src/call/record.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Çağrının yaşam döngüsündeki evresi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallPhase {
    Idle,
    Ringing,
    Connected,
}

/// Sistem genelindeki TEK çağrı kaydı. Sadece `CallSignaling` tarafından
/// mutasyona uğratılır; diğer bileşenler yalnızca kopyasını görür.
///
/// Değişmezler:
/// - `phase = Idle` ise `caller`, `callee` ve `phase_started_at` boştur.
/// - `phase ∈ {Ringing, Connected}` ise `caller` ve `phase_started_at` doludur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    #[serde(rename = "status")]
    pub phase: CallPhase,
    pub caller: Option<String>,
    pub callee: Option<String>,
    #[serde(rename = "started_at")]
    pub phase_started_at: Option<DateTime<Utc>>,
}

impl CallRecord {
    pub fn idle() -> Self {
        CallRecord {
            phase: CallPhase::Idle,
            caller: None,
            callee: None,
            phase_started_at: None,
        }
    }

    /// Kaydı yerinde Idle durumuna sıfırlar (cancel ve zaman aşımı yolu).
    pub fn reset(&mut self) {
        *self = CallRecord::idle();
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        CallRecord::idle()
    }
}

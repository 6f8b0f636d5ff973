// File: src/call/signaling.rs

use crate::call::record::{CallPhase, CallRecord};
use crate::call::timeout::RingTimeoutPolicy;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// İstekte zorunlu kimlik alanı eksik. Kayıt dokunulmadan bırakılır.
    #[error("{field} required")]
    InvalidInput { field: &'static str },

    /// İstenen geçiş mevcut evrede yasal değil. Kayıt dokunulmadan bırakılır;
    /// istemcinin ekranını güncelleyebilmesi için mevcut hali taşınır.
    #[error("{message}")]
    Conflict { message: String, state: CallRecord },
}

/// Çağrı sinyalleşme durum makinesi.
///
/// Tek `CallRecord`'un sahibi. Her operasyon kilidi alır, önce zaman aşımı
/// mutabakatını (reconciliation) uygular, sonra geçişi dener; bu ikili tek
/// bir kritik bölgedir. Kritik bölge içinde hiçbir I/O yapılmaz, dolayısıyla
/// kilit tutma süresi ihmal edilebilir düzeydedir.
pub struct CallSignaling {
    record: Mutex<CallRecord>,
    timeout_policy: RingTimeoutPolicy,
}

impl CallSignaling {
    pub fn new() -> Self {
        CallSignaling::with_policy(RingTimeoutPolicy::default())
    }

    /// Testlerin 30 saniye beklememesi için politika dışarıdan verilebilir.
    pub fn with_policy(timeout_policy: RingTimeoutPolicy) -> Self {
        CallSignaling {
            record: Mutex::new(CallRecord::idle()),
            timeout_policy,
        }
    }

    /// Süresi dolmuş bir Ringing kaydını Idle'a sıfırlar. Her operasyonun
    /// başında, kilit alınmışken çağrılır.
    fn reconcile(&self, record: &mut CallRecord) {
        if self.timeout_policy.is_expired(record, Utc::now()) {
            info!(caller = ?record.caller, "Çalma süresi doldu, çağrı kaydı sıfırlanıyor.");
            record.reset();
        }
    }

    /// Yeni bir çağrı başlatır. Kayıt Idle değilse `Conflict` döner ve
    /// kayda dokunmaz.
    pub async fn start(
        &self,
        initiator: &str,
        target: Option<&str>,
    ) -> Result<CallRecord, SignalError> {
        if initiator.trim().is_empty() {
            return Err(SignalError::InvalidInput { field: "role" });
        }

        let mut record = self.record.lock().await;
        self.reconcile(&mut record);

        if record.phase != CallPhase::Idle {
            return Err(SignalError::Conflict {
                message: "Call already in progress".to_string(),
                state: record.clone(),
            });
        }

        record.phase = CallPhase::Ringing;
        record.caller = Some(initiator.to_string());
        record.callee = target
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        record.phase_started_at = Some(Utc::now());

        info!(caller = %initiator, callee = ?record.callee, "Çağrı başlatıldı, karşı taraf aranıyor.");
        Ok(record.clone())
    }

    /// Mutabakat sonrası kaydın anlık görüntüsünü döner. Hiç başarısız olmaz.
    pub async fn status(&self) -> CallRecord {
        let mut record = self.record.lock().await;
        self.reconcile(&mut record);
        record.clone()
    }

    /// Çalan çağrıyı cevaplar. Arayanın kendi çağrısını kabul etmesi,
    /// istemci hatası/yarışından kaynaklansa bile reddedilir.
    pub async fn accept(&self, responder: &str) -> Result<CallRecord, SignalError> {
        if responder.trim().is_empty() {
            return Err(SignalError::InvalidInput { field: "role" });
        }

        let mut record = self.record.lock().await;
        self.reconcile(&mut record);

        if record.phase != CallPhase::Ringing {
            return Err(SignalError::Conflict {
                message: "No incoming call to accept".to_string(),
                state: record.clone(),
            });
        }

        if record.caller.as_deref() == Some(responder) {
            return Err(SignalError::Conflict {
                message: "Caller cannot accept their own call".to_string(),
                state: record.clone(),
            });
        }

        record.phase = CallPhase::Connected;
        if record.callee.is_none() {
            record.callee = Some(responder.to_string());
        }
        // phase_started_at "mevcut evrenin başlangıcı"dır, çağrının değil.
        record.phase_started_at = Some(Utc::now());

        info!(caller = ?record.caller, callee = ?record.callee, "Çağrı cevaplandı, bağlantı kuruldu.");
        Ok(record.clone())
    }

    /// Evrenseldir ve asla başarısız olmaz: hangi evrede olursa olsun kaydı
    /// Idle'a döndürür. İstemcinin her durumdan çıkabileceği kaçış yoludur.
    pub async fn cancel(&self) -> CallRecord {
        let mut record = self.record.lock().await;
        if record.phase != CallPhase::Idle {
            info!(caller = ?record.caller, phase = ?record.phase, "Çağrı sonlandırıldı, kayıt sıfırlandı.");
        }
        record.reset();
        record.clone()
    }
}

impl Default for CallSignaling {
    fn default() -> Self {
        CallSignaling::new()
    }
}

// File: src/call/timeout.rs

use crate::call::record::{CallPhase, CallRecord};
use chrono::{DateTime, TimeDelta, Utc};

/// Çalan bir çağrının cevaplanması için tanınan süre (saniye).
pub const RING_TIMEOUT_SECS: i64 = 30;

/// Süresi dolmuş bir Ringing kaydını tespit eden saf politika.
///
/// Arka planda bir zamanlayıcı YOK: bu kontrol her operasyonun başında,
/// kayıt kilidi alınmışken tembelce uygulanır. Böylece zamanlayıcı iptali
/// gibi kenar durumlarla hiç uğraşmıyoruz.
#[derive(Debug, Clone, Copy)]
pub struct RingTimeoutPolicy {
    timeout: TimeDelta,
}

impl RingTimeoutPolicy {
    pub fn new(timeout: TimeDelta) -> Self {
        RingTimeoutPolicy { timeout }
    }

    /// Yalnızca Ringing evresindeki ve süresi `timeout`'u aşmış kayıtlar
    /// için true döner. Yan etkisi yoktur.
    pub fn is_expired(&self, record: &CallRecord, now: DateTime<Utc>) -> bool {
        match (record.phase, record.phase_started_at) {
            (CallPhase::Ringing, Some(started_at)) => now - started_at > self.timeout,
            _ => false,
        }
    }
}

impl Default for RingTimeoutPolicy {
    fn default() -> Self {
        RingTimeoutPolicy::new(TimeDelta::seconds(RING_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ringing_record(started_at: DateTime<Utc>) -> CallRecord {
        CallRecord {
            phase: CallPhase::Ringing,
            caller: Some("Mo".to_string()),
            callee: None,
            phase_started_at: Some(started_at),
        }
    }

    #[test]
    fn ringing_older_than_timeout_is_expired() {
        let policy = RingTimeoutPolicy::default();
        let now = Utc::now();
        let record = ringing_record(now - TimeDelta::seconds(RING_TIMEOUT_SECS + 1));
        assert!(policy.is_expired(&record, now));
    }

    #[test]
    fn ringing_within_timeout_is_not_expired() {
        let policy = RingTimeoutPolicy::default();
        let now = Utc::now();
        let record = ringing_record(now - TimeDelta::seconds(RING_TIMEOUT_SECS - 1));
        assert!(!policy.is_expired(&record, now));
    }

    #[test]
    fn idle_and_connected_never_expire() {
        let policy = RingTimeoutPolicy::default();
        let now = Utc::now();

        assert!(!policy.is_expired(&CallRecord::idle(), now));

        let mut connected = ringing_record(now - TimeDelta::seconds(600));
        connected.phase = CallPhase::Connected;
        assert!(!policy.is_expired(&connected, now));
    }
}

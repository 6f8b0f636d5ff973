// azizam-call-signaling-service/src/call/mod.rs

pub mod record;
pub mod signaling;
pub mod timeout;

pub use record::{CallPhase, CallRecord};
pub use signaling::{CallSignaling, SignalError};

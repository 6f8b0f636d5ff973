// azizam-call-signaling-service/src/media/mod.rs

pub mod token;

pub use token::{AgoraTokenIssuer, MediaTokenIssuer, TokenError};

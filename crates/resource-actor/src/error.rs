//! # Framework Errors
//!
//! Common error types shared by every actor and client built on this crate.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// An insert targeted a key that is already present. The stored item is left untouched.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

//! Errors raised by the content generation port

use std::time::Duration;
use thiserror::Error;

/// Content generator failure. Callers recover with fallback content.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation service unavailable: {0}")]
    Unavailable(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Generation transport error: {0}")]
    Transport(String),

    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed generation response: {0}")]
    InvalidResponse(String),
}

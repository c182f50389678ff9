//! Error handling utilities for the store

use gallery_core::error::DomainError;

/// Convert an I/O error to DomainError
pub fn map_io_error(e: std::io::Error) -> DomainError {
    DomainError::StorageError(e.to_string())
}

/// Convert a parse failure for `key` to DomainError
pub fn map_corrupt(key: &str, e: serde_json::Error) -> DomainError {
    DomainError::CorruptData {
        key: key.to_string(),
        reason: e.to_string(),
    }
}

/// Serialization of in-memory entities should not fail; report it as a storage error
pub fn map_serialize_error(key: &str, e: serde_json::Error) -> DomainError {
    DomainError::StorageError(format!("failed to serialize {key}: {e}"))
}

/// Create a "quota exceeded" error
pub fn quota_exceeded(key: &str) -> DomainError {
    DomainError::StorageQuotaExceeded {
        key: key.to_string(),
    }
}

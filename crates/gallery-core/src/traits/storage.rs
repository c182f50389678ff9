//! Storage backend port - a synchronous string key-value store
//!
//! Mirrors per-profile browser storage: every key holds one serialized
//! value, writes replace the value wholesale, and a write that would exceed
//! the backend's capacity fails with `DomainError::StorageQuotaExceeded`
//! leaving the previous value intact.

use crate::error::DomainError;

/// Result type for storage operations
pub type RepoResult<T> = Result<T, DomainError>;

pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Remove `key` (no-op when absent)
    fn remove(&self, key: &str) -> RepoResult<()>;

    /// Check whether `key` holds a value
    fn contains(&self, key: &str) -> RepoResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

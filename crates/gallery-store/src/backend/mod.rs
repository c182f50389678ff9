//! `StorageBackend` implementations

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Bytes a single entry counts against a quota
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

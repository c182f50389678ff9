//! Ports implemented by infrastructure crates

mod generation;
mod storage;

pub use generation::{ContentGenerator, GenerationResult};
pub use storage::{RepoResult, StorageBackend};

//! # gallery-core
//!
//! Domain layer containing entities, value objects, catalog queries, and the ports
//! (storage backend, content generator) implemented by infrastructure crates.
//! This crate has zero dependencies on infrastructure (storage, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Artwork, ArtworkStatus, Category, Order, OrderStatus, PaymentAccount, PaymentProvider, User,
    UserRole,
};
pub use error::{DomainError, GenerationError};
pub use query::{distinct_tags, ArtworkQuery};
pub use traits::{ContentGenerator, GenerationResult, RepoResult, StorageBackend};
pub use value_objects::{normalize_tags, EntityId, GeneratedImage, IdGenerator, IdKind};

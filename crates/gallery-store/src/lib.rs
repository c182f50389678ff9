//! # gallery-store
//!
//! Persistence layer for the marketplace: three JSON collections (users,
//! artworks, orders) and one session slot, kept in a string key-value backend.
//!
//! ## Features
//!
//! - **Backends**: in-memory and file-backed implementations of
//!   `StorageBackend`, both enforcing a byte quota
//! - **Store**: seeding, fail-soft snapshot reads, whole-collection writes
//! - **Transactions**: staged multi-collection writes restored on failure
//!
//! ## Example
//!
//! ```ignore
//! use gallery_store::{MemoryBackend, Store};
//!
//! let store = Store::new(Arc::new(MemoryBackend::with_quota(5 * 1024 * 1024)));
//! store.initialize()?;
//!
//! let snapshot = store.read_all();
//! store.transact(|tx| {
//!     tx.artworks_mut()[0].mark_sold()?;
//!     Ok(())
//! })?;
//! ```

pub mod backend;
pub mod error;
pub mod seed;
pub mod store;

pub use backend::{FileBackend, MemoryBackend};
pub use store::{
    Snapshot, Store, Transaction, ARTWORKS_KEY, ORDERS_KEY, SESSION_KEY, USERS_KEY,
};

//! Collection store
//!
//! The single gateway to persisted state. Each collection lives under its own
//! key and is replaced wholesale on write; the session is an independent
//! denormalized copy of a user record.

mod transaction;

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use gallery_core::traits::{RepoResult, StorageBackend};
use gallery_core::{Artwork, EntityId, Order, User};

use crate::backend::MemoryBackend;
use crate::error::{map_corrupt, map_serialize_error};
use crate::seed;

pub use transaction::Transaction;

/// Key holding the user collection
pub const USERS_KEY: &str = "as_users";
/// Key holding the artwork collection
pub const ARTWORKS_KEY: &str = "as_artworks";
/// Key holding the order collection
pub const ORDERS_KEY: &str = "as_orders";
/// Key holding the current session user
pub const SESSION_KEY: &str = "as_current_user";

/// Full persisted state at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub users: Vec<User>,
    /// Newest first
    pub artworks: Vec<Artwork>,
    pub orders: Vec<Order>,
    pub session: Option<User>,
}

impl Snapshot {
    pub fn find_user(&self, id: &EntityId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Exact match on the stored email
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_artwork(&self, id: &EntityId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| &a.id == id)
    }

    pub fn find_order(&self, id: &EntityId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> RepoResult<String> {
    serde_json::to_string(value).map_err(|e| map_serialize_error(key, e))
}

/// Store over a shared key-value backend.
///
/// Clones share one transaction lock, so transactions through the same store
/// never interleave. Separate stores over one backend are last-write-wins.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    tx_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Create a store over `backend`
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            tx_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a store over an unbounded in-memory backend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Seed absent collections with the demo dataset. Never overwrites.
    #[instrument(skip(self))]
    pub fn initialize(&self) -> RepoResult<()> {
        let now = Utc::now();
        self.seed_if_absent(USERS_KEY, || seed::users(now))?;
        self.seed_if_absent(ARTWORKS_KEY, || seed::artworks(now))?;
        self.seed_if_absent(ORDERS_KEY, Vec::<Order>::new)?;
        Ok(())
    }

    fn seed_if_absent<T, F>(&self, key: &str, build: F) -> RepoResult<()>
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        if self.backend.contains(key)? {
            return Ok(());
        }
        info!(key, "Seeding empty collection");
        self.write_value(key, &build())
    }

    fn read_value<T: DeserializeOwned>(&self, key: &str) -> RepoResult<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| map_corrupt(key, e)),
            None => Ok(None),
        }
    }

    fn write_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepoResult<()> {
        let raw = encode(key, value)?;
        self.backend.set(key, &raw).inspect_err(|e| {
            error!(key, error = %e, "Failed to write collection");
        })
    }

    /// Read every collection and the session, surfacing parse failures
    pub fn try_read_all(&self) -> RepoResult<Snapshot> {
        Ok(Snapshot {
            users: self.read_value(USERS_KEY)?.unwrap_or_default(),
            artworks: self.read_value(ARTWORKS_KEY)?.unwrap_or_default(),
            orders: self.read_value(ORDERS_KEY)?.unwrap_or_default(),
            session: self.read_value::<Option<User>>(SESSION_KEY)?.flatten(),
        })
    }

    /// Read the user collection, surfacing parse failures
    pub fn try_read_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.read_value(USERS_KEY)?.unwrap_or_default())
    }

    /// Read every collection and the session.
    ///
    /// Fails soft per key: an unreadable or corrupt collection is logged and
    /// served as empty, a corrupt session as signed out.
    pub fn read_all(&self) -> Snapshot {
        Snapshot {
            users: self.read_or_default(USERS_KEY),
            artworks: self.read_or_default(ARTWORKS_KEY),
            orders: self.read_or_default(ORDERS_KEY),
            session: self.read_or_default::<Option<User>>(SESSION_KEY),
        }
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read_value(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                error!(key, error = %e, "Store read failed, serving empty value");
                T::default()
            }
        }
    }

    /// Replace the user collection
    pub fn write_users(&self, users: &[User]) -> RepoResult<()> {
        self.write_value(USERS_KEY, users)
    }

    /// Replace the artwork collection
    pub fn write_artworks(&self, artworks: &[Artwork]) -> RepoResult<()> {
        self.write_value(ARTWORKS_KEY, artworks)
    }

    /// Replace the order collection
    pub fn write_orders(&self, orders: &[Order]) -> RepoResult<()> {
        self.write_value(ORDERS_KEY, orders)
    }

    /// Set or clear the current session user
    pub fn set_session(&self, user: Option<&User>) -> RepoResult<()> {
        match user {
            Some(user) => self.write_value(SESSION_KEY, user),
            None => self.backend.remove(SESSION_KEY),
        }
    }

    /// Run `f` against a staged copy of the store and commit every collection
    /// it touched together.
    ///
    /// Nothing is written when `f` fails. When a write fails mid-commit, the
    /// keys already written are restored to their previous raw values.
    /// Reads are strict: corrupt data aborts the transaction instead of being
    /// overwritten.
    pub fn transact<T, F>(&self, f: F) -> RepoResult<T>
    where
        F: FnOnce(&mut Transaction) -> RepoResult<T>,
    {
        let _guard = self.tx_lock.lock();
        let mut tx = Transaction::begin(self.try_read_all()?);
        let output = f(&mut tx)?;
        self.commit(tx)?;
        Ok(output)
    }

    fn commit(&self, tx: Transaction) -> RepoResult<()> {
        let writes = tx.into_writes()?;
        if writes.is_empty() {
            return Ok(());
        }

        let mut previous = Vec::with_capacity(writes.len());
        for (key, _) in &writes {
            previous.push((*key, self.backend.get(key)?));
        }

        for (applied, (key, value)) in writes.iter().enumerate() {
            if let Err(e) = self.put(key, value.as_deref()) {
                error!(key, error = %e, "Commit failed, restoring previous values");
                self.restore(&previous[..applied]);
                return Err(e);
            }
        }

        debug!(keys = writes.len(), "Transaction committed");
        Ok(())
    }

    fn put(&self, key: &str, value: Option<&str>) -> RepoResult<()> {
        match value {
            Some(raw) => self.backend.set(key, raw),
            None => self.backend.remove(key),
        }
    }

    fn restore(&self, previous: &[(&'static str, Option<String>)]) {
        for (key, value) in previous.iter().rev() {
            if let Err(e) = self.put(key, value.as_deref()) {
                error!(key, error = %e, "Failed to restore previous value");
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

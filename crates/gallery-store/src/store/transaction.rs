//! Staged multi-collection writes

use gallery_core::traits::RepoResult;
use gallery_core::{Artwork, Order, User};

use super::{encode, Snapshot, ARTWORKS_KEY, ORDERS_KEY, SESSION_KEY, USERS_KEY};

/// Mutable working copy handed to `Store::transact`.
///
/// Only collections borrowed mutably are written back on commit.
#[derive(Debug)]
pub struct Transaction {
    snapshot: Snapshot,
    users_dirty: bool,
    artworks_dirty: bool,
    orders_dirty: bool,
    session_dirty: bool,
}

impl Transaction {
    pub(super) fn begin(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            users_dirty: false,
            artworks_dirty: false,
            orders_dirty: false,
            session_dirty: false,
        }
    }

    /// State as staged so far
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn users(&self) -> &[User] {
        &self.snapshot.users
    }

    pub fn users_mut(&mut self) -> &mut Vec<User> {
        self.users_dirty = true;
        &mut self.snapshot.users
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.snapshot.artworks
    }

    pub fn artworks_mut(&mut self) -> &mut Vec<Artwork> {
        self.artworks_dirty = true;
        &mut self.snapshot.artworks
    }

    pub fn orders(&self) -> &[Order] {
        &self.snapshot.orders
    }

    pub fn orders_mut(&mut self) -> &mut Vec<Order> {
        self.orders_dirty = true;
        &mut self.snapshot.orders
    }

    pub fn session(&self) -> Option<&User> {
        self.snapshot.session.as_ref()
    }

    pub fn set_session(&mut self, user: Option<User>) {
        self.session_dirty = true;
        self.snapshot.session = user;
    }

    /// Whether commit will write anything
    pub fn is_dirty(&self) -> bool {
        self.users_dirty || self.artworks_dirty || self.orders_dirty || self.session_dirty
    }

    /// Serialize every touched key. `None` means remove.
    ///
    /// Everything is encoded before the first write so a serialization
    /// failure cannot leave a partial commit.
    pub(super) fn into_writes(self) -> RepoResult<Vec<(&'static str, Option<String>)>> {
        let mut writes = Vec::new();
        if self.users_dirty {
            writes.push((USERS_KEY, Some(encode(USERS_KEY, &self.snapshot.users)?)));
        }
        if self.artworks_dirty {
            writes.push((
                ARTWORKS_KEY,
                Some(encode(ARTWORKS_KEY, &self.snapshot.artworks)?),
            ));
        }
        if self.orders_dirty {
            writes.push((ORDERS_KEY, Some(encode(ORDERS_KEY, &self.snapshot.orders)?)));
        }
        if self.session_dirty {
            let session = self
                .snapshot
                .session
                .as_ref()
                .map(|user| encode(SESSION_KEY, user))
                .transpose()?;
            writes.push((SESSION_KEY, session));
        }
        Ok(writes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{EntityId, UserRole};

    #[test]
    fn test_reads_do_not_mark_dirty() {
        let mut tx = Transaction::begin(Snapshot::default());
        let _ = tx.users();
        let _ = tx.artworks();
        assert!(!tx.is_dirty());

        tx.orders_mut();
        assert!(tx.is_dirty());
    }

    #[test]
    fn test_cleared_session_encodes_as_removal() {
        let user = User::new(
            EntityId::from("u1"),
            "Bea".to_string(),
            "bea@example.com".to_string(),
            UserRole::Buyer,
        );
        let mut tx = Transaction::begin(Snapshot {
            session: Some(user),
            ..Snapshot::default()
        });
        tx.set_session(None);

        let writes = tx.into_writes().unwrap();
        assert_eq!(writes, vec![(SESSION_KEY, None)]);
    }
}

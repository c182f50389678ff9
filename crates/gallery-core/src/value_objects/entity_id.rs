//! Entity identifiers - prefixed random base36 strings
//!
//! Structure: `<prefix><suffix>` where the prefix names the collection
//! (`u` users, `w` artworks, `ord-` orders) and the suffix is 9 random
//! characters from `[0-9a-z]`. Seed records use short literal ids (`a1`, `w1`).

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw identifier
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which collection an id is minted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    User,
    Artwork,
    Order,
}

impl IdKind {
    /// Prefix carried by every id of this kind
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::User => "u",
            Self::Artwork => "w",
            Self::Order => "ord-",
        }
    }
}

/// Random id generator
#[derive(Debug, Clone)]
pub struct IdGenerator {
    suffix_len: usize,
}

impl IdGenerator {
    const CHARSET: &'static [u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    /// Default suffix length
    pub const DEFAULT_SUFFIX_LEN: usize = 9;

    /// Create a generator with the given suffix length
    ///
    /// # Panics
    /// Panics if `suffix_len` is zero
    pub fn new(suffix_len: usize) -> Self {
        assert!(suffix_len > 0, "Suffix length must be > 0");
        Self { suffix_len }
    }

    /// Generate a fresh id of the given kind
    pub fn generate(&self, kind: IdKind) -> EntityId {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..self.suffix_len)
            .map(|_| Self::CHARSET[rng.gen_range(0..Self::CHARSET.len())] as char)
            .collect();
        EntityId(format!("{}{suffix}", kind.prefix()))
    }

    /// Generate an id that `taken` reports as unused
    pub fn generate_unique<F>(&self, kind: IdKind, taken: F) -> EntityId
    where
        F: Fn(&EntityId) -> bool,
    {
        loop {
            let id = self.generate(kind);
            if !taken(&id) {
                return id;
            }
        }
    }

    /// Suffix length of generated ids
    pub fn suffix_len(&self) -> usize {
        self.suffix_len
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUFFIX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes() {
        let gen = IdGenerator::default();
        assert!(gen.generate(IdKind::User).as_str().starts_with('u'));
        assert!(gen.generate(IdKind::Artwork).as_str().starts_with('w'));
        assert!(gen.generate(IdKind::Order).as_str().starts_with("ord-"));
    }

    #[test]
    fn test_suffix_shape() {
        let gen = IdGenerator::default();
        let id = gen.generate(IdKind::Order);
        let suffix = &id.as_str()["ord-".len()..];
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_unique_skips_taken() {
        let gen = IdGenerator::new(1);
        let attempts = Cell::new(0);
        let id = gen.generate_unique(IdKind::Artwork, |_| {
            attempts.set(attempts.get() + 1);
            attempts.get() < 3
        });
        assert_eq!(attempts.get(), 3);
        assert_eq!(id.as_str().len(), 2);
    }

    #[test]
    fn test_ids_are_distinct() {
        let gen = IdGenerator::default();
        let ids: HashSet<_> = (0..500).map(|_| gen.generate(IdKind::User)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::from("w1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w1\"");
        let back: EntityId = serde_json::from_str("\"a2\"").unwrap();
        assert_eq!(back, EntityId::from("a2"));
    }

    #[test]
    #[should_panic(expected = "Suffix length must be > 0")]
    fn test_zero_suffix_rejected() {
        IdGenerator::new(0);
    }
}

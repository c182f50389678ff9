//! Catalog queries - read-only derivations over an artwork snapshot

mod artwork_query;

pub use artwork_query::{distinct_tags, ArtworkQuery};

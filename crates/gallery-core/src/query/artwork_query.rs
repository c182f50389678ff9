//! Artwork filter
//!
//! Every active predicate must hold (logical AND). Results keep the order of
//! the source collection, which is newest first.

use std::collections::BTreeSet;

use crate::entities::{Artwork, Category};
use crate::error::DomainError;

/// Label used by the catalog for "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Filter options for catalog browsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkQuery {
    pub category: Option<Category>,
    /// Exact tag membership (tags are stored lower-cased)
    pub tag: Option<String>,
    /// Inclusive price ceiling
    pub max_price: Option<u64>,
    /// Case-insensitive substring over title, artist name, and tags
    pub search: Option<String>,
}

impl ArtworkQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the category from a UI label; `"All"` clears the filter
    pub fn with_category_label(mut self, label: &str) -> Result<Self, DomainError> {
        self.category = if label == ALL_CATEGORIES {
            None
        } else {
            Some(label.parse()?)
        };
        Ok(self)
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into().to_lowercase());
        self
    }

    #[must_use]
    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check whether a single artwork satisfies every active predicate
    pub fn matches(&self, artwork: &Artwork) -> bool {
        if let Some(category) = self.category {
            if artwork.category != category {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            if !artwork.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if artwork.price > max_price {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !artwork.matches_text(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Filter a snapshot, preserving its order
    pub fn apply<'a>(&self, artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
        artworks.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Distinct tags across the whole collection, sorted
pub fn distinct_tags(artworks: &[Artwork]) -> Vec<String> {
    artworks
        .iter()
        .flat_map(|a| a.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

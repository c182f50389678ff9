//! Artwork entity - a sellable creative work

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Artwork category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Paintings")]
    Paintings,
    #[serde(rename = "Sculptures")]
    Sculptures,
    #[serde(rename = "Indoor Art")]
    IndoorArt,
    #[serde(rename = "Other / Mixed Media")]
    MixedMedia,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Self::Paintings,
        Self::Sculptures,
        Self::IndoorArt,
        Self::MixedMedia,
    ];

    /// Persisted / display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paintings => "Paintings",
            Self::Sculptures => "Sculptures",
            Self::IndoorArt => "Indoor Art",
            Self::MixedMedia => "Other / Mixed Media",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::InvalidValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// Sale status of an artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtworkStatus {
    Available,
    Sold,
    Reserved,
}

impl ArtworkStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Reserved => "Reserved",
        }
    }

    /// Forward transitions: only Available may move, to Sold or Reserved
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Available, Self::Sold) | (Self::Available, Self::Reserved)
        )
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artwork entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: EntityId,
    pub artist_id: EntityId,
    /// Snapshot of the artist's name at publish time
    pub artist_name: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub price: u64,
    /// Empty while an image is pending generation
    #[serde(default)]
    pub image_url: String,
    pub status: ArtworkStatus,
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == ArtworkStatus::Available
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: &EntityId) -> bool {
        &self.artist_id == user_id
    }

    #[inline]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    fn transition(&mut self, next: ArtworkStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::ArtworkNotAvailable {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Available -> Sold
    pub fn mark_sold(&mut self) -> Result<(), DomainError> {
        self.transition(ArtworkStatus::Sold)
    }

    /// Available -> Reserved
    pub fn reserve(&mut self) -> Result<(), DomainError> {
        self.transition(ArtworkStatus::Reserved)
    }

    /// Compensating Sold -> Available after a sale is canceled.
    /// Returns whether the status changed.
    pub fn reopen(&mut self) -> bool {
        if self.status == ArtworkStatus::Sold {
            self.status = ArtworkStatus::Available;
            true
        } else {
            false
        }
    }

    /// Case-insensitive substring match on title, artist name, or any tag.
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist_name.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

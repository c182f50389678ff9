//! Catalog service
//!
//! Read-only views over the collection: filtered browsing, the tag
//! vocabulary, featured works, artist pages, and per-user dashboards.
//! Reads fail soft, so a corrupt collection shows as empty.

use tracing::{debug, instrument};

use gallery_core::{distinct_tags, Artwork, ArtworkQuery, DomainError, EntityId, Order};

use crate::dto::{ArtistDashboard, ArtistProfile, CatalogPage};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of works shown on the landing page
pub const FEATURED_COUNT: usize = 4;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Artworks matching every active filter, in stored order
    #[instrument(skip(self))]
    pub fn browse(&self, query: &ArtworkQuery) -> CatalogPage {
        let snapshot = self.ctx.store().read_all();
        let artworks: Vec<Artwork> = query.apply(&snapshot.artworks).into_iter().cloned().collect();
        debug!(
            matched = artworks.len(),
            total = snapshot.artworks.len(),
            "Catalog filtered"
        );
        CatalogPage {
            tags: distinct_tags(&snapshot.artworks),
            artworks,
        }
    }

    /// Distinct tags across the collection, sorted
    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.ctx.store().read_all().artworks)
    }

    /// The first `limit` artworks; newest first since publishing prepends
    pub fn featured(&self, limit: usize) -> Vec<Artwork> {
        let mut artworks = self.ctx.store().read_all().artworks;
        artworks.truncate(limit);
        artworks
    }

    /// Look up one artwork
    pub fn artwork(&self, id: &EntityId) -> ServiceResult<Artwork> {
        self.ctx
            .store()
            .read_all()
            .find_artwork(id)
            .cloned()
            .ok_or_else(|| DomainError::ArtworkNotFound(id.clone()).into())
    }

    /// Public page for a user and the works they list
    pub fn artist_profile(&self, artist_id: &EntityId) -> ServiceResult<ArtistProfile> {
        let snapshot = self.ctx.store().read_all();
        let artist = snapshot
            .find_user(artist_id)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(artist_id.clone()))?;
        let artworks = snapshot
            .artworks
            .into_iter()
            .filter(|a| a.is_owned_by(artist_id))
            .collect();
        Ok(ArtistProfile { artist, artworks })
    }

    /// Studio view for the session artist: their works, sales, and revenue
    pub async fn dashboard(&self) -> ServiceResult<ArtistDashboard> {
        let artist = AuthService::new(self.ctx).require_user().await?;
        if !artist.is_artist() {
            return Err(DomainError::NotAnArtist.into());
        }

        let snapshot = self.ctx.store().read_all();
        let artworks = snapshot
            .artworks
            .into_iter()
            .filter(|a| a.is_owned_by(&artist.id))
            .collect();
        let sales = snapshot
            .orders
            .into_iter()
            .filter(|o| o.artist_id == artist.id)
            .collect();
        Ok(ArtistDashboard::new(artist, artworks, sales))
    }

    /// Orders placed by the session user, in stored order
    pub async fn buyer_orders(&self) -> ServiceResult<Vec<Order>> {
        let buyer = AuthService::new(self.ctx).require_user().await?;
        Ok(self
            .ctx
            .store()
            .read_all()
            .orders
            .into_iter()
            .filter(|o| o.buyer_id == buyer.id)
            .collect())
    }
}

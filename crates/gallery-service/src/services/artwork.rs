//! Artwork service
//!
//! Publishing, editing, reservation, and removal by the owning artist, plus
//! repair of artworks stored without an image.

use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use gallery_core::{normalize_tags, Artwork, ArtworkStatus, DomainError, EntityId, IdKind, User};
use gallery_store::Transaction;

use crate::dto::{EditArtworkRequest, PublishArtworkRequest};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::generation::GenerationService;

/// Prices are whole positive currency units
fn positive_price(raw: i64) -> Result<u64, DomainError> {
    u64::try_from(raw)
        .ok()
        .filter(|p| *p > 0)
        .ok_or(DomainError::NonPositivePrice(raw))
}

/// Index of `id` in the staged artworks, checking ownership
fn owned_index(tx: &Transaction, id: &EntityId, owner: &User) -> Result<usize, DomainError> {
    let index = tx
        .artworks()
        .iter()
        .position(|a| &a.id == id)
        .ok_or_else(|| DomainError::ArtworkNotFound(id.clone()))?;
    if !tx.artworks()[index].is_owned_by(&owner.id) {
        return Err(DomainError::NotArtworkOwner);
    }
    Ok(index)
}

/// Artwork service
pub struct ArtworkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArtworkService<'a> {
    /// Create a new ArtworkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new artwork as the current user.
    ///
    /// The publishing gate and every field are checked before anything is
    /// written. Without an image reference one is generated; when that fails
    /// the publish is refused. The new artwork goes first in the collection.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn publish(&self, request: PublishArtworkRequest) -> ServiceResult<Artwork> {
        let artist = AuthService::new(self.ctx).require_user().await?;
        artist.ensure_can_publish()?;
        request.validate()?;
        let price = positive_price(request.price)?;
        let tags = normalize_tags(&request.tags);

        let image_url = match request.image_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => GenerationService::new(self.ctx)
                .illustrate(&request.title, request.category, &tags)
                .await?
                .ok_or_else(|| {
                    warn!("No image supplied and none could be generated");
                    DomainError::ImageRequired
                })?,
        };

        let artwork = self.ctx.store().transact(|tx| {
            let id = self
                .ctx
                .generate_id(IdKind::Artwork, |id| tx.artworks().iter().any(|a| &a.id == id));
            let artwork = Artwork {
                id,
                artist_id: artist.id.clone(),
                artist_name: artist.name.clone(),
                title: request.title.trim().to_string(),
                description: request.description.trim().to_string(),
                category: request.category,
                tags,
                price,
                image_url,
                status: ArtworkStatus::Available,
                created_at: Utc::now(),
            };
            tx.artworks_mut().insert(0, artwork.clone());
            Ok(artwork)
        })?;

        info!(artwork_id = %artwork.id, artist_id = %artist.id, "Artwork published");
        Ok(artwork)
    }

    /// Replace the mutable fields of an artwork owned by the current user.
    ///
    /// Id, artist, status, and creation time never change. An unknown id is
    /// reported as not found and leaves the collection untouched.
    #[instrument(skip(self, request))]
    pub async fn edit(&self, id: &EntityId, request: EditArtworkRequest) -> ServiceResult<Artwork> {
        let user = AuthService::new(self.ctx).require_user().await?;
        request.validate()?;
        let price = positive_price(request.price)?;
        let tags = normalize_tags(&request.tags);

        let artwork = self.ctx.store().transact(|tx| {
            let index = owned_index(tx, id, &user)?;
            let artwork = &mut tx.artworks_mut()[index];

            artwork.title = request.title.trim().to_string();
            artwork.description = request.description.trim().to_string();
            artwork.category = request.category;
            artwork.tags = tags;
            artwork.price = price;
            if let Some(url) = request.image_url.filter(|url| !url.trim().is_empty()) {
                artwork.image_url = url;
            }
            Ok(artwork.clone())
        })?;

        info!(artwork_id = %artwork.id, "Artwork edited");
        Ok(artwork)
    }

    /// Remove an artwork owned by the current user
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &EntityId) -> ServiceResult<()> {
        let user = AuthService::new(self.ctx).require_user().await?;

        self.ctx.store().transact(|tx| {
            let index = owned_index(tx, id, &user)?;
            tx.artworks_mut().remove(index);
            Ok(())
        })?;

        info!(artwork_id = %id, "Artwork removed by owner");
        Ok(())
    }

    /// Available -> Reserved, by the owner
    #[instrument(skip(self))]
    pub async fn reserve(&self, id: &EntityId) -> ServiceResult<Artwork> {
        let user = AuthService::new(self.ctx).require_user().await?;

        let artwork = self.ctx.store().transact(|tx| {
            let index = owned_index(tx, id, &user)?;
            let artwork = &mut tx.artworks_mut()[index];
            artwork.reserve()?;
            Ok(artwork.clone())
        })?;

        info!(artwork_id = %artwork.id, "Artwork reserved");
        Ok(artwork)
    }

    /// Generate and store an image for an artwork that has none.
    ///
    /// Returns the artwork unchanged when it already has an image or the
    /// generator produced nothing.
    #[instrument(skip(self))]
    pub async fn repair_missing_image(&self, id: &EntityId) -> ServiceResult<Artwork> {
        let artwork = self
            .ctx
            .store()
            .read_all()
            .find_artwork(id)
            .cloned()
            .ok_or_else(|| DomainError::ArtworkNotFound(id.clone()))?;
        if artwork.has_image() {
            return Ok(artwork);
        }

        let Some(url) = GenerationService::new(self.ctx)
            .illustrate(&artwork.title, artwork.category, &artwork.tags)
            .await?
        else {
            return Ok(artwork);
        };

        let repaired = self.ctx.store().transact(|tx| {
            let artwork = tx
                .artworks_mut()
                .iter_mut()
                .find(|a| &a.id == id)
                .ok_or_else(|| DomainError::ArtworkNotFound(id.clone()))?;
            if !artwork.has_image() {
                artwork.image_url = url;
            }
            Ok(artwork.clone())
        })?;

        info!(artwork_id = %id, "Missing image repaired");
        Ok(repaired)
    }
}

//! Checkout service
//!
//! Simulated purchase: a fixed processing delay standing in for the payment
//! gateway, then the artwork status flip and order creation in one commit.

use tracing::{debug, info, instrument};

use gallery_core::{DomainError, EntityId, IdKind, Order, PaymentProvider};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Checkout service
pub struct CheckoutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckoutService<'a> {
    /// Create a new CheckoutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Buy an available artwork as the current user.
    ///
    /// Unauthenticated callers get `NotAuthenticated` and nothing changes.
    /// Availability is checked again inside the commit, so a second submit
    /// for the same artwork fails without creating another order.
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        artwork_id: &EntityId,
        payment_method: PaymentProvider,
    ) -> ServiceResult<Order> {
        let buyer = AuthService::new(self.ctx).require_user().await?;

        let snapshot = self.ctx.store().read_all();
        let artwork = snapshot
            .find_artwork(artwork_id)
            .ok_or_else(|| DomainError::ArtworkNotFound(artwork_id.clone()))?;
        if !artwork.is_available() {
            return Err(DomainError::ArtworkNotAvailable {
                id: artwork.id.clone(),
                status: artwork.status,
            }
            .into());
        }

        let delay = self.ctx.checkout_delay();
        if !delay.is_zero() {
            debug!(?delay, "Processing payment");
            tokio::time::sleep(delay).await;
        }

        let order = self.ctx.store().transact(|tx| {
            let index = tx
                .artworks()
                .iter()
                .position(|a| &a.id == artwork_id)
                .ok_or_else(|| DomainError::ArtworkNotFound(artwork_id.clone()))?;
            let artwork = &mut tx.artworks_mut()[index];
            artwork.mark_sold()?;
            let artwork = artwork.clone();

            let id = self
                .ctx
                .generate_id(IdKind::Order, |id| tx.orders().iter().any(|o| &o.id == id));
            let order = Order::for_purchase(id, &buyer, &artwork, payment_method);
            tx.orders_mut().push(order.clone());
            Ok(order)
        })?;

        info!(
            order_id = %order.id,
            buyer_id = %order.buyer_id,
            amount = order.amount,
            "Artwork purchased"
        );
        Ok(order)
    }
}

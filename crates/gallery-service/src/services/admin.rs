//! Admin service
//!
//! Moderation operations. Every method requires the Admin role.

use tracing::{info, instrument};

use gallery_core::{ArtworkStatus, DomainError, EntityId, Order, OrderStatus};

use crate::dto::AdminOverview;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All users, artworks, and orders
    pub async fn overview(&self) -> ServiceResult<AdminOverview> {
        AuthService::new(self.ctx).require_admin().await?;
        let snapshot = self.ctx.store().read_all();
        Ok(AdminOverview {
            users: snapshot.users,
            artworks: snapshot.artworks,
            orders: snapshot.orders,
        })
    }

    /// Remove any artwork. Returns whether a record was removed.
    #[instrument(skip(self))]
    pub async fn remove_artwork(&self, id: &EntityId) -> ServiceResult<bool> {
        let admin = AuthService::new(self.ctx).require_admin().await?;

        let removed = self.ctx.store().transact(|tx| {
            let Some(index) = tx.artworks().iter().position(|a| &a.id == id) else {
                return Ok(false);
            };
            tx.artworks_mut().remove(index);
            Ok(true)
        })?;

        if removed {
            info!(artwork_id = %id, admin_id = %admin.id, "Artwork removed by admin");
        }
        Ok(removed)
    }

    /// Remove a user record. Returns whether a record was removed.
    ///
    /// Their artworks and orders stay as historical snapshots. A session
    /// pointing at the removed user is cleared in the same commit.
    #[instrument(skip(self))]
    pub async fn suspend_user(&self, id: &EntityId) -> ServiceResult<bool> {
        let admin = AuthService::new(self.ctx).require_admin().await?;

        let removed = self.ctx.store().transact(|tx| {
            let Some(index) = tx.users().iter().position(|u| &u.id == id) else {
                return Ok(false);
            };
            tx.users_mut().remove(index);
            if tx.session().is_some_and(|s| &s.id == id) {
                tx.set_session(None);
            }
            Ok(true)
        })?;

        if removed {
            info!(user_id = %id, admin_id = %admin.id, "User suspended");
        }
        Ok(removed)
    }

    /// Force an order to Canceled.
    ///
    /// Cancelling a Completed order re-opens its Sold artwork in the same
    /// commit. Cancelling an already canceled order changes nothing.
    #[instrument(skip(self))]
    pub async fn force_cancel_order(&self, id: &EntityId) -> ServiceResult<Order> {
        let admin = AuthService::new(self.ctx).require_admin().await?;

        let order = self.ctx.store().transact(|tx| {
            let index = tx
                .orders()
                .iter()
                .position(|o| &o.id == id)
                .ok_or_else(|| DomainError::OrderNotFound(id.clone()))?;
            if tx.orders()[index].is_canceled() {
                return Ok(tx.orders()[index].clone());
            }

            let order = &mut tx.orders_mut()[index];
            let previous = order.cancel();
            let order = order.clone();

            if previous == Some(OrderStatus::Completed) {
                let sold = tx
                    .artworks()
                    .iter()
                    .position(|a| a.id == order.artwork_id && a.status == ArtworkStatus::Sold);
                if let Some(artwork_index) = sold {
                    tx.artworks_mut()[artwork_index].reopen();
                    info!(artwork_id = %order.artwork_id, "Artwork re-opened after cancellation");
                }
            }
            Ok(order)
        })?;

        info!(order_id = %id, admin_id = %admin.id, "Order canceled by admin");
        Ok(order)
    }
}

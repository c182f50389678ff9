//! Order entity - record of a completed (or canceled) acquisition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Artwork, PaymentProvider, User};
use crate::value_objects::EntityId;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Pending,
    Canceled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Canceled => "Canceled",
        })
    }
}

/// Order entity. Buyer and artwork fields are snapshots taken at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub buyer_id: EntityId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub artist_id: EntityId,
    pub artwork_id: EntityId,
    pub artwork_title: String,
    pub amount: u64,
    pub payment_method: PaymentProvider,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build the Completed order recorded by a purchase
    pub fn for_purchase(
        id: EntityId,
        buyer: &User,
        artwork: &Artwork,
        payment_method: PaymentProvider,
    ) -> Self {
        Self {
            id,
            buyer_id: buyer.id.clone(),
            buyer_name: buyer.name.clone(),
            buyer_email: buyer.email.clone(),
            artist_id: artwork.artist_id.clone(),
            artwork_id: artwork.id.clone(),
            artwork_title: artwork.title.clone(),
            amount: artwork.price,
            payment_method,
            status: OrderStatus::Completed,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }

    /// Force the order to Canceled. Returns the previous status if it changed.
    pub fn cancel(&mut self) -> Option<OrderStatus> {
        if self.is_canceled() {
            return None;
        }
        let previous = self.status;
        self.status = OrderStatus::Canceled;
        Some(previous)
    }
}

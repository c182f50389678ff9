//! User entity - an artist, buyer, or admin of the marketplace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Marketplace role, fixed at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Artist,
    Buyer,
    Admin,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "ARTIST",
            Self::Buyer => "BUYER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARTIST" => Ok(Self::Artist),
            "BUYER" => Ok(Self::Buyer),
            "ADMIN" => Ok(Self::Admin),
            other => Err(DomainError::InvalidValue {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Payment provider used both for payout accounts and checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentProvider {
    PayPal,
    Revolut,
}

impl PaymentProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PayPal => "PayPal",
            Self::Revolut => "Revolut",
        }
    }
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PayPal" => Ok(Self::PayPal),
            "Revolut" => Ok(Self::Revolut),
            other => Err(DomainError::InvalidValue {
                field: "payment provider",
                value: other.to_string(),
            }),
        }
    }
}

/// Connected payout account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
    #[serde(rename = "type")]
    pub provider: PaymentProvider,
    /// Email for PayPal, username/tag for Revolut
    pub identifier: String,
    pub connected_at: DateTime<Utc>,
}

impl PaymentAccount {
    pub fn new(provider: PaymentProvider, identifier: impl Into<String>) -> Self {
        Self {
            provider,
            identifier: identifier.into(),
            connected_at: Utc::now(),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    /// Login key
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub joined_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_account: Option<PaymentAccount>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: EntityId, name: String, email: String, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            avatar: None,
            bio: None,
            joined_at: Utc::now(),
            payment_account: None,
        }
    }

    /// Attach a payment account
    #[must_use]
    pub fn with_payment_account(mut self, account: PaymentAccount) -> Self {
        self.payment_account = Some(account);
        self
    }

    #[inline]
    pub fn is_artist(&self) -> bool {
        self.role == UserRole::Artist
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    #[inline]
    pub fn has_payment_account(&self) -> bool {
        self.payment_account.is_some()
    }

    /// Check the publishing gate: artist role and a connected payment account
    pub fn ensure_can_publish(&self) -> Result<(), DomainError> {
        if !self.is_artist() {
            return Err(DomainError::NotAnArtist);
        }
        if !self.has_payment_account() {
            return Err(DomainError::PaymentAccountRequired);
        }
        Ok(())
    }
}

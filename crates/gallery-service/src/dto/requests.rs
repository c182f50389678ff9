//! Request DTOs for marketplace operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use gallery_core::{Category, PaymentProvider, UserRole};

/// Reject empty or whitespace-only text
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Payout account details collected at signup or in the profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentAccountInput {
    #[serde(rename = "type")]
    pub provider: PaymentProvider,

    /// Email for PayPal, username/tag for Revolut
    #[validate(custom(function = "not_blank"))]
    pub identifier: String,
}

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub role: UserRole,

    /// Mandatory for artists, ignored otherwise
    #[validate(nested)]
    #[serde(default)]
    pub payment_account: Option<PaymentAccountInput>,
}

/// Login request. There is no credential: the email is the whole identity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update for the current user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    #[serde(default)]
    pub bio: Option<String>,

    /// `None` keeps the current account
    #[validate(nested)]
    #[serde(default)]
    pub payment_account: Option<PaymentAccountInput>,
}

// ============================================================================
// Artwork Requests
// ============================================================================

/// New artwork submitted from the studio
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishArtworkRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,

    pub category: Category,

    /// Comma-separated, normalized on write
    #[serde(default)]
    pub tags: String,

    /// Whole currency units; must be positive
    pub price: i64,

    /// Image reference; generated when absent or empty
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Replacement values for an existing artwork's mutable fields
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditArtworkRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,

    pub category: Category,

    #[serde(default)]
    pub tags: String,

    pub price: i64,

    /// `None` or empty keeps the current image
    #[serde(default)]
    pub image_url: Option<String>,
}

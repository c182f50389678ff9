//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ArtworkStatus;
use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("No user registered with email {0}")]
    UserEmailNotFound(String),

    #[error("Artwork not found: {0}")]
    ArtworkNotFound(EntityId),

    #[error("Order not found: {0}")]
    OrderNotFound(EntityId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Price must be a positive integer, got {0}")]
    NonPositivePrice(i64),

    #[error("An image is required to publish an artwork")]
    ImageRequired,

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Only artists can publish artworks")]
    NotAnArtist,

    #[error("A connected payment account is mandatory for publication")]
    PaymentAccountRequired,

    #[error("Not the owner of this artwork")]
    NotArtworkOwner,

    #[error("Admin role required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Artwork {id} is not available (status: {status})")]
    ArtworkNotAvailable { id: EntityId, status: ArtworkStatus },

    // =========================================================================
    // Storage Errors
    // =========================================================================
    #[error("Storage limit reached while writing {key}")]
    StorageQuotaExceeded { key: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Corrupt data under {key}: {reason}")]
    CorruptData { key: String, reason: String },
}

impl DomainError {
    /// Get an error code string for the presentation boundary
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UserEmailNotFound(_) => "UNKNOWN_USER",
            Self::ArtworkNotFound(_) => "UNKNOWN_ARTWORK",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NonPositivePrice(_) => "INVALID_PRICE",
            Self::ImageRequired => "IMAGE_REQUIRED",
            Self::InvalidValue { .. } => "INVALID_VALUE",

            // Authorization
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::NotAnArtist => "NOT_AN_ARTIST",
            Self::PaymentAccountRequired => "PAYMENT_ACCOUNT_REQUIRED",
            Self::NotArtworkOwner => "NOT_ARTWORK_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXISTS",
            Self::ArtworkNotAvailable { .. } => "ARTWORK_NOT_AVAILABLE",

            // Storage
            Self::StorageQuotaExceeded { .. } => "STORAGE_QUOTA_EXCEEDED",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::CorruptData { .. } => "CORRUPT_DATA",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UserEmailNotFound(_)
                | Self::ArtworkNotFound(_)
                | Self::OrderNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::NonPositivePrice(_)
                | Self::ImageRequired
                | Self::InvalidValue { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated
                | Self::NotAnArtist
                | Self::PaymentAccountRequired
                | Self::NotArtworkOwner
                | Self::AdminRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists(_) | Self::ArtworkNotAvailable { .. }
        )
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageQuotaExceeded { .. } | Self::StorageError(_) | Self::CorruptData { .. }
        )
    }
}

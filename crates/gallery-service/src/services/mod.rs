//! Business logic services
//!
//! Each service borrows the `ServiceContext`, resolves the acting user from
//! the session where an operation is gated, and mutates the store through a
//! single transaction per operation.

pub mod admin;
pub mod artwork;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod context;
pub mod error;
pub mod generation;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use admin::AdminService;
pub use artwork::ArtworkService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use checkout::CheckoutService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use generation::GenerationService;
pub use user::UserService;

//! Data transfer objects for service inputs and outputs
//!
//! - Request DTOs with declarative validation
//! - Response views assembled from store snapshots

pub mod requests;
pub mod responses;

pub use requests::{
    EditArtworkRequest, LogInRequest, PaymentAccountInput, PublishArtworkRequest, SignUpRequest,
    UpdateProfileRequest,
};
pub use responses::{AdminOverview, ArtistDashboard, ArtistProfile, CatalogPage};

//! # gallery-service
//!
//! Application layer: marketplace use cases over the collection store and
//! the generation port, plus request DTOs with declarative validation.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, ArtworkService, AuthService, CatalogService, CheckoutService, GenerationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};

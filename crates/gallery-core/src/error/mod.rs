//! Domain error types

mod domain_error;
mod generation_error;

pub use domain_error::DomainError;
pub use generation_error::GenerationError;

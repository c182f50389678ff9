//! Integration test utilities for the art marketplace
//!
//! This crate provides helpers for running end-to-end scenarios against
//! the service layer over a real store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

//! Integration test utilities for the guest crates
//!
//! Provides fixture accounts and helpers for exercising the domain,
//! configuration, and service layers together.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

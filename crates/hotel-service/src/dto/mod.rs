//! Data transfer objects for guest intake and display
//!
//! This module provides:
//! - Request DTOs with validation for form input, and exported user accounts
//! - Response DTOs for rendering guest rows
//! - Mappers for converting guests to responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateGuestRequest, UserAccount};
pub use responses::{ApiResponse, GuestResponse};

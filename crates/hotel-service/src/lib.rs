//! # hotel-service
//!
//! Application layer containing guest services and DTOs, plus the
//! `guest-migrate` tool that converts a user export into a guest listing.

pub mod dto;
pub mod services;

pub use dto::{ApiResponse, CreateGuestRequest, GuestResponse, UserAccount};
pub use services::{
    migrate_json, migrate_users, GuestService, MigrationReport, ServiceError, ServiceResult,
    SkipReason, SkippedUser,
};

//! Guest services
//!
//! Intake from form input, presentation of guest rows, and migration of
//! existing user accounts into guest records.

pub mod error;
pub mod guest;
pub mod migration;

pub use error::{ServiceError, ServiceResult};
pub use guest::GuestService;
pub use migration::{migrate_json, migrate_users, MigrationReport, SkipReason, SkippedUser};

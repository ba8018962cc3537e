//! # hotel-core
//!
//! Domain layer containing the guest entity, value objects, and the traits
//! through which external records are converted into guests.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Guest;
pub use error::DomainError;
pub use traits::UserRecord;
pub use value_objects::{
    BadgeClass, GuestId, IdParseError, LoyaltyTier, LoyaltyTierParseError, ReservationId,
};

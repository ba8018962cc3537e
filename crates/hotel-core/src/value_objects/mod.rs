//! Value objects - immutable types that represent domain concepts

mod id;
mod loyalty;

pub use id::{GuestId, IdParseError, ReservationId};
pub use loyalty::{BadgeClass, LoyaltyTier, LoyaltyTierParseError};

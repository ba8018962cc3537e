//! Structural view of a generic user account
//!
//! Guests can be derived from any user store that exposes these fields,
//! so the domain never depends on a concrete user type.

use chrono::{DateTime, Utc};

use crate::value_objects::GuestId;

/// Read access to the user fields a guest is built from
pub trait UserRecord {
    fn id(&self) -> GuestId;

    fn username(&self) -> Option<&str>;

    fn full_name(&self) -> &str;

    fn email(&self) -> Option<&str>;

    fn phone(&self) -> Option<&str>;

    /// Account status flag
    fn is_active(&self) -> bool;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// Bookings counted on the user account
    fn total_bookings(&self) -> i32;
}

//! Request DTOs for guest intake
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! The guest entity accepts anything; checks on user input live here.

use chrono::{DateTime, Utc};
use hotel_core::{Guest, GuestId, UserRecord};
use serde::Deserialize;
use validator::Validate;

/// New guest form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,

    /// Tier name; unknown names are kept and render with the default badge
    pub loyalty_status: Option<String>,
}

impl CreateGuestRequest {
    /// Trim text fields and drop optional ones left blank on the form
    #[must_use]
    pub fn normalized(self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            full_name: self.full_name.trim().to_string(),
            email: blank_to_none(self.email),
            phone: blank_to_none(self.phone),
            notes: blank_to_none(self.notes),
            loyalty_status: blank_to_none(self.loyalty_status),
        }
    }

    /// Build the guest this form describes
    pub fn into_guest(self) -> Guest {
        let mut guest = Guest::new(self.full_name, self.email, self.phone);
        guest.notes = self.notes;
        guest.loyalty_status = self.loyalty_status;
        guest
    }
}

/// A user account exported from the user store, as read by the migration tool
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    /// Numeric id, or a numeric string
    pub id: GuestId,
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_bookings: i32,
}

fn default_active() -> bool {
    true
}

impl UserRecord for UserAccount {
    fn id(&self) -> GuestId {
        self.id
    }

    fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn total_bookings(&self) -> i32 {
        self.total_bookings
    }
}

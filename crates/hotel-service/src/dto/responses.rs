//! Response DTOs for rendering guests
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One guest row as shown in listings and detail views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    pub total_bookings: i32,
    pub completed_bookings: i32,
    pub total_spent: f64,
    pub last_visit: Option<NaiveDate>,
    pub loyalty_status: Option<String>,
    pub avg_nights: f64,
    /// Reservation IDs, present only when history was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_history: Option<Vec<i64>>,

    // Presentation helpers
    pub initial: String,
    pub badge_class: String,
    pub is_vip: bool,
    pub formatted_avg_nights: String,
}

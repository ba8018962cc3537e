//! Test fixtures and data generators
//!
//! Provides reusable user accounts for migration tests.

use chrono::{DateTime, TimeZone, Utc};
use hotel_core::{GuestId, UserRecord};
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique test ids
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique id for test data
pub fn unique_id() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user account as the legacy user store keeps it
#[derive(Debug, Clone)]
pub struct LegacyAccount {
    pub id: i64,
    pub username: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub total_bookings: i32,
}

impl LegacyAccount {
    /// An active account with a unique id and login
    pub fn unique(full_name: &str) -> Self {
        let id = unique_id();
        Self {
            id,
            username: Some(format!("guest{id}")),
            full_name: full_name.to_string(),
            email: Some(format!("guest{id}@example.com")),
            phone: None,
            status: true,
            created_at: Some(fixed_time(2024, 1, 15)),
            updated_at: Some(fixed_time(2024, 6, 1)),
            total_bookings: 0,
        }
    }

    #[must_use]
    pub fn with_bookings(mut self, total_bookings: i32) -> Self {
        self.total_bookings = total_bookings;
        self
    }
}

/// Midnight UTC on the given day
pub fn fixed_time(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl UserRecord for LegacyAccount {
    fn id(&self) -> GuestId {
        GuestId::new(self.id)
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
        self.status
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

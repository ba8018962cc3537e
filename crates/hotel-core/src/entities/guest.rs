//! Guest entity - a hotel customer with booking statistics

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use crate::traits::UserRecord;
use crate::value_objects::{BadgeClass, GuestId, LoyaltyTier, ReservationId};

/// Initial shown for guests without a name
const FALLBACK_INITIAL: &str = "G";

/// Digits kept after the decimal point for average nights
const AVG_NIGHTS_DECIMAL_PLACES: u32 = 1;

/// Guest entity
///
/// A plain record: counters and amounts are expected to stay non-negative,
/// but that is left to whoever fills them in. Timestamps are owned by the
/// persistence layer and are never touched here.
#[derive(Clone, PartialEq)]
pub struct Guest {
    pub id: GuestId,
    /// Absent for guests without a login account
    pub username: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,

    pub total_bookings: i32,
    pub completed_bookings: i32,
    pub total_spent: f64,
    pub last_visit: Option<NaiveDate>,
    /// Raw tier name as stored; classified case-insensitively
    pub loyalty_status: Option<String>,
    /// Average length of stay in nights
    pub avg_nights: f64,

    /// Reservations loaded for this guest, oldest first. Owned elsewhere.
    pub booking_history: Option<Vec<ReservationId>>,
}

impl Default for Guest {
    fn default() -> Self {
        Self {
            id: GuestId::default(),
            username: None,
            full_name: String::new(),
            email: None,
            phone: None,
            active: true,
            created_at: None,
            updated_at: None,
            notes: None,
            total_bookings: 0,
            completed_bookings: 0,
            total_spent: 0.0,
            last_visit: None,
            loyalty_status: None,
            avg_nights: 0.0,
            booking_history: None,
        }
    }
}

impl Guest {
    /// Create a new Guest from form input
    pub fn new(
        full_name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email,
            phone,
            ..Self::default()
        }
    }

    /// Build a guest from a user account.
    ///
    /// Copies identity, contact, status, audit timestamps and the booking
    /// count. Statistics the user account does not track keep their defaults.
    pub fn from_user<U: UserRecord + ?Sized>(user: &U) -> Self {
        Self {
            id: user.id(),
            username: user.username().map(str::to_owned),
            full_name: user.full_name().to_owned(),
            email: user.email().map(str::to_owned),
            phone: user.phone().map(str::to_owned),
            active: user.is_active(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
            total_bookings: user.total_bookings(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<GuestId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_loyalty_status(mut self, status: impl Into<String>) -> Self {
        self.loyalty_status = Some(status.into());
        self
    }

    /// Set booking statistics in one go
    pub fn with_stats(mut self, total_bookings: i32, completed_bookings: i32, total_spent: f64) -> Self {
        self.total_bookings = total_bookings;
        self.completed_bookings = completed_bookings;
        self.total_spent = total_spent;
        self
    }

    pub fn with_avg_nights(mut self, avg_nights: f64) -> Self {
        self.avg_nights = avg_nights;
        self
    }

    pub fn with_last_visit(mut self, last_visit: NaiveDate) -> Self {
        self.last_visit = Some(last_visit);
        self
    }

    pub fn with_booking_history(mut self, history: Vec<ReservationId>) -> Self {
        self.booking_history = Some(history);
        self
    }

    /// First letter of the name, upper-cased, or `"G"` for unnamed guests
    pub fn initial(&self) -> String {
        self.initial_or(FALLBACK_INITIAL)
    }

    /// Like [`Guest::initial`] with a caller supplied fallback
    pub fn initial_or(&self, fallback: &str) -> String {
        match self.full_name.chars().next() {
            // Some characters upper-case to more than one char (ß -> SS)
            Some(first) => first.to_uppercase().collect(),
            None => fallback.to_string(),
        }
    }

    /// Recognized loyalty tier, if any
    #[inline]
    pub fn loyalty_tier(&self) -> Option<LoyaltyTier> {
        self.loyalty_status.as_deref().and_then(LoyaltyTier::parse)
    }

    /// Badge category for the loyalty status. Missing or unknown tiers
    /// render as [`BadgeClass::Secondary`].
    pub fn loyalty_badge_class(&self) -> BadgeClass {
        self.loyalty_tier()
            .map_or(BadgeClass::Secondary, LoyaltyTier::badge_class)
    }

    #[inline]
    pub fn is_vip(&self) -> bool {
        self.loyalty_tier() == Some(LoyaltyTier::Vip)
    }

    /// Average nights with one decimal place.
    ///
    /// Rounds half away from zero on the shortest decimal form of the value,
    /// so 2.25 gives "2.3" and 3.15 gives "3.2" even though neither is exact
    /// in binary.
    pub fn formatted_avg_nights(&self) -> String {
        // f64 Display prints the shortest string that round-trips
        match Decimal::from_str(&self.avg_nights.to_string()) {
            Ok(value) => {
                let mut rounded = value.round_dp_with_strategy(
                    AVG_NIGHTS_DECIMAL_PLACES,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                rounded.rescale(AVG_NIGHTS_DECIMAL_PLACES);
                rounded.to_string()
            }
            // NaN, infinities and values beyond Decimal's range
            Err(_) => format!("{:.1}", self.avg_nights),
        }
    }

    /// Share of bookings that were completed, `None` without bookings
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total_bookings <= 0 {
            return None;
        }
        Some(f64::from(self.completed_bookings) / f64::from(self.total_bookings))
    }
}

impl<U: UserRecord> From<&U> for Guest {
    fn from(user: &U) -> Self {
        Self::from_user(user)
    }
}

impl fmt::Debug for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guest")
            .field("id", &self.id.into_inner())
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("active", &self.active)
            .field("total_bookings", &self.total_bookings)
            .field("completed_bookings", &self.completed_bookings)
            .field("total_spent", &self.total_spent)
            .field("last_visit", &self.last_visit)
            .field("loyalty_status", &self.loyalty_status)
            .field("avg_nights", &self.avg_nights)
            .finish_non_exhaustive()
    }
}

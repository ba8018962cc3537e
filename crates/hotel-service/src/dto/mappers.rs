//! Guest to DTO mappers

use hotel_common::PresentationConfig;
use hotel_core::Guest;

use super::responses::GuestResponse;

impl GuestResponse {
    /// Render a guest with the given presentation settings
    pub fn from_guest(guest: &Guest, presentation: &PresentationConfig) -> Self {
        Self {
            id: guest.id.into_inner(),
            username: guest.username.clone(),
            full_name: guest.full_name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            active: guest.active,
            notes: guest.notes.clone(),
            created_at: guest.created_at,
            updated_at: guest.updated_at,
            total_bookings: guest.total_bookings,
            completed_bookings: guest.completed_bookings,
            total_spent: guest.total_spent,
            last_visit: guest.last_visit,
            loyalty_status: guest.loyalty_status.clone(),
            avg_nights: guest.avg_nights,
            booking_history: guest
                .booking_history
                .as_ref()
                .map(|ids| ids.iter().map(|id| id.into_inner()).collect()),
            initial: guest.initial_or(&presentation.fallback_initial),
            badge_class: guest
                .loyalty_badge_class()
                .css_class_with_prefix(&presentation.badge_prefix),
            is_vip: guest.is_vip(),
            formatted_avg_nights: guest.formatted_avg_nights(),
        }
    }
}

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self::from_guest(guest, &PresentationConfig::default())
    }
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self::from(&guest)
    }
}

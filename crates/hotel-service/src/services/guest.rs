//! Guest service - intake and presentation of guest records

use hotel_common::PresentationConfig;
use hotel_core::Guest;
use validator::Validate;

use super::error::ServiceResult;
use crate::dto::{ApiResponse, CreateGuestRequest, GuestResponse};

/// Turns form input into guests and guests into display rows
#[derive(Debug, Clone, Default)]
pub struct GuestService {
    presentation: PresentationConfig,
}

impl GuestService {
    pub fn new(presentation: PresentationConfig) -> Self {
        Self { presentation }
    }

    pub fn presentation(&self) -> &PresentationConfig {
        &self.presentation
    }

    /// Validate a new guest form and build the guest.
    ///
    /// The returned guest has no id yet; the store assigns one on insert.
    #[tracing::instrument(skip(self, request), fields(full_name = %request.full_name))]
    pub fn register(&self, request: CreateGuestRequest) -> ServiceResult<Guest> {
        let request = request.normalized();
        if let Err(errors) = request.validate() {
            tracing::debug!(?errors, "Rejected guest form");
            return Err(errors.into());
        }

        let guest = request.into_guest();
        tracing::info!(loyalty = ?guest.loyalty_tier(), "Guest registered");
        Ok(guest)
    }

    /// Render one guest row
    pub fn render(&self, guest: &Guest) -> GuestResponse {
        GuestResponse::from_guest(guest, &self.presentation)
    }

    /// Render a guest listing
    pub fn render_list(&self, guests: &[Guest]) -> ApiResponse<Vec<GuestResponse>> {
        let rows: Vec<GuestResponse> = guests.iter().map(|guest| self.render(guest)).collect();
        tracing::debug!(count = rows.len(), "Rendered guest list");
        ApiResponse::new(rows)
    }

    /// Render only VIP guests, keeping listing order
    pub fn render_vips(&self, guests: &[Guest]) -> ApiResponse<Vec<GuestResponse>> {
        let rows = guests
            .iter()
            .filter(|guest| guest.is_vip())
            .map(|guest| self.render(guest))
            .collect();
        ApiResponse::new(rows)
    }
}

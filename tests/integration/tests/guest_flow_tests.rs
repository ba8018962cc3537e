//! Guest flow integration tests
//!
//! Exercise migration, intake, and rendering across the crates.
//!
//! Run with: cargo test -p integration-tests --test guest_flow_tests

use hotel_core::{BadgeClass, Guest, GuestId};
use hotel_service::{
    migrate_json, migrate_users, CreateGuestRequest, GuestService, ServiceError, SkipReason,
};
use integration_tests::{fixtures::*, json_str, test_config};

// ============================================================================
// Migration Tests
// ============================================================================

#[test]
fn test_migrated_guests_keep_user_fields() {
    let account = LegacyAccount::unique("jane doe").with_bookings(5);
    let report = migrate_users([&account]);

    assert!(report.is_clean());
    let guest = &report.guests[0];
    assert_eq!(guest.id, GuestId::new(account.id));
    assert_eq!(guest.username, account.username);
    assert_eq!(guest.email, account.email);
    assert_eq!(guest.created_at, Some(fixed_time(2024, 1, 15)));
    assert_eq!(guest.updated_at, Some(fixed_time(2024, 6, 1)));
    assert_eq!(guest.total_bookings, 5);
    assert_eq!(guest.completed_bookings, 0);
    assert!(guest.loyalty_status.is_none());
    assert_eq!(guest.initial(), "J");
}

#[test]
fn test_migration_reports_skipped_accounts() {
    let first = LegacyAccount::unique("Ana");
    let mut duplicate = LegacyAccount::unique("Ana copy");
    duplicate.id = first.id;
    let mut unsaved = LegacyAccount::unique("Draft");
    unsaved.id = 0;
    let unnamed = LegacyAccount::unique("   ");

    let report = migrate_users(&vec![first, duplicate, unsaved, unnamed]);

    assert_eq!(report.migrated_count(), 1);
    let reasons: Vec<SkipReason> = report.skipped.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        [SkipReason::DuplicateId, SkipReason::MissingId, SkipReason::BlankName]
    );
}

#[test]
fn test_migration_tool_pipeline() -> anyhow::Result<()> {
    let service = GuestService::new(test_config(&[("GUEST_BADGE_PREFIX", "tag-")])?.presentation);
    let input = r#"[
        {"id": 21, "username": "ana", "full_name": "ana", "email": "ana@example.com",
         "created_at": "2024-01-15T00:00:00Z", "total_bookings": 3},
        {"id": 22, "full_name": "  "},
        {"id": 21, "full_name": "Ana again"}
    ]"#;
    let mut output = Vec::new();

    let report = migrate_json(&service, input.as_bytes(), &mut output)?;
    assert_eq!(report.migrated_count(), 1);
    assert_eq!(report.skipped.len(), 2);

    let listing: serde_json::Value = serde_json::from_slice(&output)?;
    let row = &listing["data"][0];
    assert_eq!(json_str(row, "full_name")?, "ana");
    assert_eq!(json_str(row, "initial")?, "A");
    assert_eq!(json_str(row, "badge_class")?, "tag-secondary");
    assert_eq!(json_str(row, "created_at")?, "2024-01-15T00:00:00Z");
    assert_eq!(row["total_bookings"], 3);
    assert!(listing["data"][1].is_null());
    Ok(())
}

// ============================================================================
// Intake and Rendering Tests
// ============================================================================

#[test]
fn test_registered_guest_renders_with_configured_badges() -> anyhow::Result<()> {
    let config = test_config(&[("GUEST_BADGE_PREFIX", "pill-")])?;
    let service = GuestService::new(config.presentation);

    let request: CreateGuestRequest = serde_json::from_str(
        r#"{"full_name":"maria","email":"maria@example.com","loyalty_status":"Vip"}"#,
    )?;
    let guest = service.register(request)?.with_id(40).with_avg_nights(2.25);

    assert_eq!(guest.loyalty_badge_class(), BadgeClass::Danger);

    let json = serde_json::to_value(service.render(&guest))?;
    assert_eq!(json_str(&json, "badge_class")?, "pill-danger");
    assert_eq!(json_str(&json, "initial")?, "M");
    assert_eq!(json_str(&json, "formatted_avg_nights")?, "2.3");
    assert_eq!(json["is_vip"], true);
    assert_eq!(json["id"], 40);
    Ok(())
}

#[test]
fn test_listing_of_migrated_guests() -> anyhow::Result<()> {
    let service = GuestService::new(test_config(&[])?.presentation);
    let accounts = [LegacyAccount::unique("Ana"), LegacyAccount::unique("")];

    let mut guests = migrate_users(&accounts).guests;
    assert_eq!(guests.len(), 1);
    guests[0].loyalty_status = Some("silver".to_string());
    // Walk-in guest registered without a name
    guests.push(Guest::default().with_id(unique_id()));

    let listing = serde_json::to_value(service.render_list(&guests))?;
    let rows = listing["data"].as_array().map(Vec::as_slice).unwrap_or_default();

    assert_eq!(rows.len(), 2);
    assert_eq!(json_str(&rows[0], "badge_class")?, "badge-info");
    assert_eq!(json_str(&rows[1], "badge_class")?, "badge-secondary");
    assert_eq!(json_str(&rows[1], "initial")?, "G");
    Ok(())
}

#[test]
fn test_invalid_form_is_rejected() {
    let service = GuestService::default();
    let request: CreateGuestRequest =
        serde_json::from_str(r#"{"full_name":"  ","email":"x"}"#).unwrap();

    let err = service.register(request).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_guest_defaults() {
    let guest = Guest::default();
    assert!(guest.active);
    assert_eq!(guest.formatted_avg_nights(), "0.0");
    assert_eq!(guest.clone().with_avg_nights(0.25).formatted_avg_nights(), "0.3");
    assert_eq!(guest.clone().with_avg_nights(3.15).formatted_avg_nights(), "3.2");
    assert_eq!(guest.loyalty_badge_class().as_str(), "secondary");
}

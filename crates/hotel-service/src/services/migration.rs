//! Migration of user accounts into guest records

use std::collections::HashSet;
use std::fmt;
use std::io::{Read, Write};

use hotel_common::AppError;
use hotel_core::{Guest, GuestId, UserRecord};

use super::error::ServiceResult;
use super::guest::GuestService;
use crate::dto::UserAccount;

/// Why a user account was left out of a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The account has no id assigned by the store
    MissingId,
    /// The name is empty or only whitespace
    BlankName,
    /// An earlier account in the batch already produced this id
    DuplicateId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => f.write_str("missing id"),
            Self::BlankName => f.write_str("blank name"),
            Self::DuplicateId => f.write_str("duplicate id"),
        }
    }
}

/// A user account that was not migrated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUser {
    /// Position of the account in the input batch
    pub index: usize,
    pub id: GuestId,
    pub reason: SkipReason,
}

/// Outcome of a migration batch
#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Converted guests, in input order
    pub guests: Vec<Guest>,
    pub skipped: Vec<SkippedUser>,
}

impl MigrationReport {
    pub fn migrated_count(&self) -> usize {
        self.guests.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Convert a batch of user accounts into guests.
///
/// Each account goes through [`Guest::from_user`]. Accounts without an id,
/// with a blank name, or repeating an earlier id are skipped and listed in
/// the report. A skipped account does not claim its id.
pub fn migrate_users<'a, U, I>(users: I) -> MigrationReport
where
    U: UserRecord + 'a,
    I: IntoIterator<Item = &'a U>,
{
    let mut report = MigrationReport::default();
    let mut seen = HashSet::new();

    for (index, user) in users.into_iter().enumerate() {
        let id = user.id();
        let reason = if id.is_zero() {
            Some(SkipReason::MissingId)
        } else if user.full_name().trim().is_empty() {
            Some(SkipReason::BlankName)
        } else if !seen.insert(id) {
            Some(SkipReason::DuplicateId)
        } else {
            None
        };

        if let Some(reason) = reason {
            tracing::warn!(index, %id, %reason, "Skipping user during guest migration");
            report.skipped.push(SkippedUser { index, id, reason });
            continue;
        }

        let guest = Guest::from_user(user);
        tracing::debug!(%id, bookings = guest.total_bookings, "Migrated user to guest");
        report.guests.push(guest);
    }

    tracing::info!(
        migrated = report.migrated_count(),
        skipped = report.skipped.len(),
        "Guest migration finished"
    );
    report
}

/// Read a JSON array of user accounts, migrate them, and write the
/// rendered guest listing as JSON.
///
/// Unparseable input fails before anything is written.
pub fn migrate_json<R, W>(
    service: &GuestService,
    input: R,
    mut output: W,
) -> ServiceResult<MigrationReport>
where
    R: Read,
    W: Write,
{
    let accounts: Vec<UserAccount> = serde_json::from_reader(input)
        .map_err(|e| AppError::InvalidInput(format!("user export: {e}")))?;
    tracing::debug!(count = accounts.len(), "Read user accounts");

    let report = migrate_users(&accounts);
    let listing = service.render_list(&report.guests);

    serde_json::to_writer_pretty(&mut output, &listing).map_err(AppError::internal)?;
    writeln!(output).map_err(AppError::internal)?;
    output.flush().map_err(AppError::internal)?;
    Ok(report)
}

//! Guest migration tool
//!
//! Reads a JSON array of user accounts on stdin and writes the migrated
//! guest listing as JSON on stdout. Logs go to stderr.
//!
//! Run with:
//! ```bash
//! cargo run -p hotel-service --bin guest-migrate < users.json
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use hotel_common::{try_init_tracing, AppConfig, AppError};
use hotel_service::{migrate_json, GuestService, ServiceResult};
use tracing::{error, info, warn};

fn main() {
    if let Err(e) = run() {
        error!(error = %e, code = e.error_code(), "Guest migration failed");
        std::process::exit(1);
    }
}

fn run() -> ServiceResult<()> {
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        AppError::from(e)
    })?;

    if let Err(e) = try_init_tracing(&config.tracing_config()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(app = %config.app.name, env = ?config.app.env, "Configuration loaded");

    let service = GuestService::new(config.presentation);
    let report = migrate_json(&service, std::io::stdin().lock(), std::io::stdout().lock())?;

    if !report.is_clean() {
        warn!(skipped = report.skipped.len(), "Some accounts were not migrated");
    }
    Ok(())
}

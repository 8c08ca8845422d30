pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config::AppConfig;

/// Opens the process-wide database connection.
///
/// Called once at startup; the handle is injected into `AppState` and closed
/// on shutdown. Connect and acquire timeouts come from the configuration so a
/// stalled store surfaces as a `DbErr` instead of a hung request.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.database_url();

    // SQLite won't create intermediate directories.
    if url.starts_with("sqlite://") {
        if let Some(parent) = Path::new(&config.database_path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(config.db_connect_timeout())
        .acquire_timeout(config.db_acquire_timeout())
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::info!(path = %config.database_path, "Connected to database");
    Ok(db)
}

use colored::*;
use sea_orm::{Database, DbErr};
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration one step at a time, printing a status line per step.
///
/// Stops at the first failure and returns its error; already applied steps stay recorded.
pub async fn run_pending_migrations(url: &str) -> Result<(), DbErr> {
    let db = Database::connect(url).await?;
    let pending = Migrator::get_pending_migrations(&db).await?;

    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
    }

    for migration in pending {
        let name_str = format!("Applying {}", migration.name().bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
        print!("{}{} ", name_str, dots);
        io::stdout().flush().ok();

        let start = Instant::now();
        match Migrator::up(&db, Some(1)).await {
            Ok(()) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Err(e) => {
                println!("{}", "failed".red());
                db.close().await.ok();
                return Err(e);
            }
        }
    }

    db.close().await
}

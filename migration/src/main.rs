use std::{fs, path::Path, process::ExitCode};

use colored::*;
use migration::runner;
use util::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "config error:".red());
            return ExitCode::FAILURE;
        }
    };

    let db_path = config.database_path.clone();
    let url = config.database_url();

    let result = match std::env::args().nth(1).as_deref() {
        Some("clean") => {
            remove_db_file(&db_path);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_pending_migrations(&url).await
        }
        Some("migrate") | None => {
            create_db_dir(&db_path);
            runner::run_pending_migrations(&url).await
        }
        Some(other) => {
            eprintln!("{} {other}", "unknown command:".red());
            eprintln!("usage: migration [migrate|fresh|clean]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "migration failed:".red());
            ExitCode::FAILURE
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }
    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => eprintln!("Failed to delete {}: {e}", db_path.display()),
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {e}", parent.display());
        }
    }
}

//! Database migration runner.
//!
//! `migrate` (or `migrate up`) applies pending migrations, `migrate down`
//! rolls everything back and `migrate status` lists applied and pending ones.
//! Exits 0 on success and 1 on any failure.

use cabinet_shop::{
    config::database,
    errors::Result,
    logging,
    migration::{migration_status, rollback_migrations, run_migrations},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "migrate", about = "Apply or inspect database migrations", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Apply all pending migrations (default)
    Up,
    /// Roll back every applied migration
    Down,
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let is_error = e.use_stderr();
            if let Err(print_err) = e.print() {
                error!("Failed to print usage: {}", print_err);
            }
            return if is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let command = cli.command.unwrap_or(Command::Up);

    info!("Starting database migrations...");
    let db = match database::create_connection().await {
        Ok(db) => db,
        Err(e) => {
            error!("Migration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&db, command).await;

    if let Err(e) = db.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    match result {
        Ok(()) => {
            info!("Migrations completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Migration error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(db: &DatabaseConnection, command: Command) -> Result<()> {
    match command {
        Command::Up => run_migrations(db).await,
        Command::Down => rollback_migrations(db).await,
        Command::Status => {
            let status = migration_status(db).await?;
            for name in &status.applied {
                info!("applied  {}", name);
            }
            for name in &status.pending {
                info!("pending  {}", name);
            }
            info!(
                "{} applied, {} pending",
                status.applied.len(),
                status.pending.len()
            );
            Ok(())
        }
    }
}

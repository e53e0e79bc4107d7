//! Seeds the demonstration catalogue. Exits 0 on success and 1 on any failure.

use cabinet_shop::{config::database, core::seed, logging};
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_tracing();

    info!("Starting to seed the database...");
    let db = match database::create_connection().await {
        Ok(db) => db,
        Err(e) => {
            error!("Seeding error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = seed::seed_database(&db).await;

    if let Err(e) = db.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    match result {
        Ok(summary) if summary.is_noop() => {
            info!("Database already seeded, nothing to do");
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            info!(
                "Database seeded successfully ({} categories, {} materials, {} products created)",
                summary.categories_created, summary.materials_created, summary.products_created
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding error: {}", e);
            ExitCode::FAILURE
        }
    }
}

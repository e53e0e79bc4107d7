use cabinet_shop::{
    config::{database, receipt_template, server},
    errors::Result,
    logging,
    web::{self, AppState},
};
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load .env file (non-fatal, env vars can be set externally)
    let dotenv_loaded = dotenv().is_ok();

    // 2. Initialize tracing
    logging::init_tracing();
    if !dotenv_loaded {
        info!("No .env file loaded, using process environment only.");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Receipt server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 3. Load configuration
    let template = receipt_template::load_template_from_env()?;
    let bind_addr = server::get_bind_addr()?;

    // 4. Connect to the database (schema is managed by the `migrate` binary)
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 5. Serve receipts until ctrl-c
    let app = web::router(AppState::new(db.clone(), template));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Receipt server listening on http://{}", bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = db.close().await {
        warn!("Failed to close database connection: {}", e);
    }
    served?;

    info!("Receipt server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

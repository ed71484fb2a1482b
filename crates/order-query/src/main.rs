use anyhow::{Context, Result};
use order_query::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

const SERVICE_NAME: &str = "order-query-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::init(SERVICE_NAME, endpoint))
        .transpose()
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        config.is_dev,
        config.enable_file_log,
    )?;

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to migrate database")?;
    }

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down...");

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Order query service shutdown complete.");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("🗄️ Migrations applied");

    Ok(())
}

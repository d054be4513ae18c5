use std::sync::Arc;

use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use fulfilment_api as api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = api::config::load_config()?;
    api::config::init_tracing(&cfg.log_level);

    let db_pool = api::db::establish_connection_from_app_config(&cfg).await?;
    if cfg.auto_migrate {
        api::db::run_migrations(&db_pool).await.map_err(|e| {
            error!("Failed running migrations: {}", e);
            e
        })?;
    }

    api::db::check_connection(&db_pool).await?;

    let state = api::AppState::new(Arc::new(db_pool.clone()));
    let app = api::app(state);

    let addr = cfg.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("fulfilment-api listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    api::db::close_pool(db_pool).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

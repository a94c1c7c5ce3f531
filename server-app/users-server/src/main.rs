use std::sync::Arc;
use tracing::{info, error, warn};

use users_api::{build_router, AppState};
use users_infrastructure::{create_pool, verify_connection, MySqlUserRepository};
use users_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    users_shared::telemetry::init_telemetry();

    info!("Users server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Pool connects lazily; an unreachable store is logged, not fatal
    let pool = create_pool(&config.database)?;
    match verify_connection(&pool).await {
        Ok(()) => info!("DB Connected successfully"),
        Err(e) => error!("Database Connection Error: {}", e),
    }

    let repository = Arc::new(MySqlUserRepository::new(pool));
    let app = build_router(AppState::new(repository.clone()));

    // Bind address; hostnames are resolved
    let addr = config.app.resolve_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("The server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Closing database pool...");
    repository.pool().close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}

use dotenvy::dotenv;
use tracing::{error, info};

use varsity::config::AppConfig;
use varsity::config::database::init_db_pool;
use varsity::logging;
use varsity::router::init_router;
use varsity::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    logging::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    // A database we cannot reach is fatal: exit instead of serving
    // requests that can only fail.
    let db = match init_db_pool(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {e:#}");
            std::process::exit(1);
        }
    };
    info!("Database is connected successfully");

    let port = config.port;
    let state = AppState { db, config };
    let app = init_router(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind port {port}: {e}");
            std::process::exit(1);
        }
    };
    info!("Application listening on port {}", port);
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Resolves on Ctrl+C or SIGTERM; axum then stops accepting and drains
/// in-flight requests.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutdown signal received"),
        _ = terminate => info!("Sigterm is received"),
    }
}

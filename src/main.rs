use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn, Level};

use car_comparison::config::environment::EnvironmentConfig;
use car_comparison::create_app;
use car_comparison::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env es opcional
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Car Comparison - cost of ownership service");
    info!("=============================================");
    if config.log_level.parse::<Level>().is_err() {
        warn!("⚠️ Unknown LOG_LEVEL '{}', using info", config.log_level);
    }

    info!("🏷️ Environment: {}", config.environment);
    if config.is_production() && config.recalculation_base_url.is_none() {
        warn!("⚠️ RECALCULATION_BASE_URL not set in production, recalculation stays local");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::from_config(config)?;
    let app = create_app(state);

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET  /health");
    info!("   GET  /api/comparison");
    info!("   POST /api/comparison/vehicles");
    info!("   PUT  /api/comparison/vehicles/:index/fields/:field");
    info!("   POST /api/comparison/reset");
    info!("   PUT  /api/comparison/columns/:index/visibility");
    info!("   POST /api/comparison/columns/:index/visibility/toggle");
    info!("   PUT  /api/comparison/columns/:index/lock");
    info!("   PUT  /api/comparison/sections/:key");
    info!("   POST /api/comparison/sections/:key/toggle");
    info!("   POST /api/comparison/recalculate");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Server error: {}", e);
        return Err(e.into());
    }

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM received, shutting down...");
        },
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use atlas_jobs_proxy::{
    api,
    infrastructure::{atlas::AtlasClient, config::Config, state::AppState},
    telemetry,
};
use axum::{serve, Extension};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init();
    let config = Arc::new(Config::from_env()?);
    let atlas = AtlasClient::new()?;
    info!(endpoint = atlas.endpoint(), "upstream configured");
    let state = Arc::new(AppState::new(Arc::clone(&config), Arc::new(atlas)));

    let router = api::build_router().layer(Extension(state));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!(%addr, "starting jobs proxy");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server =
        serve(listener, router.into_make_service()).with_graceful_shutdown(shutdown_signal());

    if let Err(err) = server.await {
        warn!(error = ?err, "server exited with error");
    }

    info!("jobs proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

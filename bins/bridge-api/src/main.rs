mod handlers;
mod metrics;
mod routes;


use anyhow::Context;
use axum::Router;
use bridge_judge::catalog::ChallengeCatalog;
use bridge_judge::config::Settings;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

pub struct AppState {
    pub catalog: ChallengeCatalog,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new().merge(routes::routes()).with_state(state)
}

fn init_tracing() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Campus Bridge judge API booting...");

    let settings = Settings::from_env()?;
    let catalog = settings.load_catalog()?;
    info!(
        challenges = catalog.len(),
        "Loaded challenges: {:?}",
        catalog.list().iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );

    metrics::register_metrics();

    let state = Arc::new(AppState { catalog });
    let app = build_app(state);

    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;

    info!("HTTP server listening on {}", settings.bind_addr);
    info!("Ready to judge submissions");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                warn!("Received shutdown signal");
            }
        })
        .await
        .context("Server error")?;

    info!("API shutdown complete");
    Ok(())
}

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::ServerConfig;
use mergington_activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington_activities=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::seeded();
    let seeded = state.store.read().await.len();
    info!(activities = seeded, "activity directory seeded");

    let app = web::build_router(state, &config);

    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

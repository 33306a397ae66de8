use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::Config;
use mergington::database::activities_repo::ActivitiesStore;
use mergington::web::app;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    // Rosters live for the process lifetime; a restart resets them to the seed.
    let store = ActivitiesStore::seeded();
    info!(activities = store.len(), "activity directory seeded");

    let app = app::build_router(store, &config.static_dir);

    let addr = config.addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);
    info!("open http://{}/ for the activities page", bound_addr);

    axum::serve(listener, app).await
}

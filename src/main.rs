use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use city_recipes::{routes, CityApiClient, CityService, Config, RecipeStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_recipes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!("Starting city recipes server");

    let client = CityApiClient::new(&config.base_url, &config.api_key)?;
    let store = Arc::new(RecipeStore::new());
    let service = CityService::new(client, store);

    let (addr, server) = warp::serve(routes::api(service)).try_bind_with_graceful_shutdown(
        config.listen_addr(),
        async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        },
    )?;

    tracing::info!("Server listening on {}", addr);
    server.await;

    tracing::info!("Server shutdown complete");
    Ok(())
}

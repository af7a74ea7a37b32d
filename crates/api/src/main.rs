use anyhow::Result;
use franchise_cms_api::{app, config, middleware, services::HttpLeadRelay};
use persistence::{FileStore, MemoryStore, Store};
use std::sync::Arc;
use tracing::{info, warn};

fn open_store(config: &config::StorageConfig) -> Result<Store> {
    let store = match config.backend {
        config::StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "Using file store");
            Store::new(FileStore::open(&config.data_dir, config.max_value_bytes)?)
        }
        config::StorageBackend::Memory => {
            warn!("Using in-memory store; content is lost on restart");
            Store::new(MemoryStore::new(config.max_value_bytes))
        }
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting Franchise CMS API v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config.storage)?;
    if store.initialize_if_empty()? {
        info!("Initialized empty store with seed content");
    }

    let relay = Arc::new(HttpLeadRelay::new(&config.relay)?);
    if !config.relay.enabled {
        warn!("Lead relay disabled; leads are stored locally only");
    }

    let addr = config.socket_addr()?;
    let app = app::create_app(config, store, relay);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

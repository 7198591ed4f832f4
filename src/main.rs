use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fitconnect::api::routes::create_routes;
use fitconnect::config::{AppConfig, DatabaseConfig};
use fitconnect::storage::{DynStorage, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let store: DynStorage = match DatabaseConfig::from_env()? {
        Some(db_config) => {
            let pool = db_config.create_pool().await?;
            let store = PgStore::new(pool);
            store.migrate().await?;
            info!("connected to postgres");
            Arc::new(store)
        }
        None => {
            info!("DATABASE_URL not set, using the in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let app = create_routes(store);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(
        environment = %config.environment,
        "fitconnect server listening on http://{address}"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use baseline_core::ProfileStore;
use baseline_gateway::app::{cors_layer, App};
use baseline_gateway::cli::{StorageBackendArg, CLI};
use baseline_gateway::state::AppState;
use baseline_profile::ProfileService;
use baseline_storage::{InMemoryStore, MySqlStore};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(&config, InMemoryStore::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(mysql_dsn, config.table_name.clone()).await?;
            run_server(&config, store).await?;
        }
    }

    Ok(())
}

async fn run_server<S: ProfileStore>(
    config: &CLI,
    store: S,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = ProfileService::new(store);
    let state = AppState::new(Arc::new(service));

    let app = App::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origin)?);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}

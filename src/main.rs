use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worktime_engine::api::{AppState, create_router};
use worktime_engine::config::{ConfigLoader, ServerConfig};
use worktime_engine::error::EngineError;
use worktime_engine::store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worktime_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // A missing settings file is not fatal; a broken one is.
    let loader = match ConfigLoader::load(&config.config_dir) {
        Ok(loader) => loader,
        Err(EngineError::ConfigNotFound { path }) => {
            tracing::warn!(path = %path, "No settings file, using default pause rules");
            ConfigLoader::from_rules(Default::default())
        }
        Err(err) => return Err(err.into()),
    };

    let store = JsonFileStore::new(&config.data_file);
    let ledger = store.load_or_init(loader.into_pause_rules())?;
    tracing::info!(
        data_file = %config.data_file.display(),
        employees = ledger.employees().len(),
        "Ledger ready"
    );

    let app = create_router(AppState::with_store(ledger, store));

    let addr = config.bind_address();
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

//! Process entry point: config, logging, store lifecycle, server.

use std::sync::Arc;

use products_api::{app, serve, AppError, AppState, PgProductRepository, Settings, Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("products_api=info".parse()?))
        .init();

    let settings = Settings::from_env();
    let store = Store::connect(&settings.database).await?;

    if std::env::args().nth(1).as_deref() == Some("--clear") {
        store.reset().await?;
        tracing::info!("Base de datos limpiada");
        store.close().await;
        return Ok(());
    }

    if let Err(e) = init_store(&store).await {
        if settings.database.required {
            return Err(e.into());
        }
        // Default behavior: keep serving with a lazy pool; requests fail
        // individually until the database comes back.
        tracing::error!(error = %e, "Error al conectar a la base de datos");
    }

    let state = AppState::new(Arc::new(PgProductRepository::new(store.pool().clone())));
    let router = app(state, &settings.server);
    serve(router, &settings.server.socket_addr()).await?;

    store.close().await;
    Ok(())
}

async fn init_store(store: &Store) -> Result<(), AppError> {
    store.ping().await?;
    store.sync().await
}

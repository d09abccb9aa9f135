use catalogo_api::{app, AppConfig, AppState, CatalogStore, MySqlCatalogStore};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("catalogo_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;

    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options);

    let store = MySqlCatalogStore::new(pool);
    // Probe once at startup; a dead database is logged but does not prevent
    // the server from coming up. Requests then answer 500 until it returns.
    match store.ping().await {
        Ok(()) => tracing::info!("conexão com o banco de dados MySQL estabelecida"),
        Err(err) => tracing::error!(error = %err, "erro ao conectar no banco de dados"),
    }

    let state = AppState::new(Arc::new(store));
    let router = app(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("servidor rodando em http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

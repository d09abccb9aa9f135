//! Catálogo API: product catalog, rating and favoriting backend over MySQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use models::{AvaliacaoResumo, NovaAvaliacao};
pub use routes::app;
pub use state::AppState;
pub use store::{memory::MemoryCatalogStore, mysql::MySqlCatalogStore, CatalogStore};

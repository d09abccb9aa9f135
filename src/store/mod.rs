//! Data access layer: the `CatalogStore` contract and its implementations.
//!
//! Every operation maps to a single parameterized query; untrusted input is
//! always bound, never interpolated into query text.

pub mod memory;
pub mod mysql;

use crate::error::StoreError;
use crate::models::{AvaliacaoResumo, NovaAvaliacao};
use async_trait::async_trait;
use serde_json::Value;

/// Store-side surface of the API: product reads, rating writes/reads and the
/// favorite relationship. Handlers hold this as `Arc<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Connectivity probe (`SELECT 1` or equivalent).
    async fn ping(&self) -> Result<(), StoreError>;

    /// All products, as opaque rows passed through to the client unchanged.
    async fn list_produtos(&self) -> Result<Vec<Value>, StoreError>;

    /// Products filtered by exact category match. The sentinel category
    /// `"all"` behaves identically to [`list_produtos`](Self::list_produtos).
    async fn list_produtos_por_categoria(&self, categoria: &str) -> Result<Vec<Value>, StoreError>;

    /// Insert one rating; the creation timestamp is assigned by the store.
    async fn insert_avaliacao(&self, nova: NovaAvaliacao) -> Result<(), StoreError>;

    /// Ratings for a product, newest first.
    async fn list_avaliacoes(&self, produto_id: i64) -> Result<Vec<AvaliacaoResumo>, StoreError>;

    /// Delete a rating by primary key; returns the affected-row count (0 or 1).
    async fn delete_avaliacao(&self, avaliacao_id: i64) -> Result<u64, StoreError>;

    /// Whether a favorite row exists for the pair.
    async fn find_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError>;

    async fn insert_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError>;

    async fn delete_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError>;

    /// Atomically invert the favorite relationship for the pair and return the
    /// new state (`true` = now favorited). Concurrent toggles for the same
    /// pair serialize instead of losing updates.
    async fn toggle_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError>;
}

/// Category value that selects every product regardless of category.
pub const CATEGORIA_TODAS: &str = "all";

//! MySQL-backed `CatalogStore` built on sqlx.

use crate::error::StoreError;
use crate::models::{AvaliacaoResumo, NovaAvaliacao};
use crate::store::{CatalogStore, CATEGORIA_TODAS};
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::{Column, MySqlPool, Row};

#[derive(Clone)]
pub struct MySqlCatalogStore {
    pool: MySqlPool,
}

impl MySqlCatalogStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_produtos(&self, sql: &str, categoria: Option<&str>) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(sql = %sql, "query");
        let mut query = sqlx::query(sql);
        if let Some(categoria) = categoria {
            query = query.bind(categoria);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

#[async_trait]
impl CatalogStore for MySqlCatalogStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_produtos(&self) -> Result<Vec<Value>, StoreError> {
        self.fetch_produtos("SELECT * FROM produto", None).await
    }

    async fn list_produtos_por_categoria(&self, categoria: &str) -> Result<Vec<Value>, StoreError> {
        if categoria == CATEGORIA_TODAS {
            return self.list_produtos().await;
        }
        self.fetch_produtos("SELECT * FROM produto WHERE categoria = ?", Some(categoria))
            .await
    }

    async fn insert_avaliacao(&self, nova: NovaAvaliacao) -> Result<(), StoreError> {
        let sql = "INSERT INTO avaliacao (estrelas, comentario, produto_id, usuario_id) VALUES (?, ?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        sqlx::query(sql)
            .bind(nova.estrelas)
            .bind(&nova.comentario)
            .bind(nova.produto_id)
            .bind(nova.usuario_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_avaliacoes(&self, produto_id: i64) -> Result<Vec<AvaliacaoResumo>, StoreError> {
        let sql = "SELECT estrelas, comentario FROM avaliacao WHERE produto_id = ? ORDER BY criado_em DESC";
        tracing::debug!(sql = %sql, "query");
        let avaliacoes = sqlx::query_as::<_, AvaliacaoResumo>(sql)
            .bind(produto_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(avaliacoes)
    }

    async fn delete_avaliacao(&self, avaliacao_id: i64) -> Result<u64, StoreError> {
        let sql = "DELETE FROM avaliacao WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(avaliacao_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError> {
        let sql = "SELECT 1 FROM favorito WHERE produto_id = ? AND usuario_id = ?";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(sql)
            .bind(produto_id)
            .bind(usuario_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError> {
        let sql = "INSERT INTO favorito (produto_id, usuario_id) VALUES (?, ?)";
        tracing::debug!(sql = %sql, "query");
        sqlx::query(sql)
            .bind(produto_id)
            .bind(usuario_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError> {
        let sql = "DELETE FROM favorito WHERE produto_id = ? AND usuario_id = ?";
        tracing::debug!(sql = %sql, "query");
        sqlx::query(sql)
            .bind(produto_id)
            .bind(usuario_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn toggle_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        // The row lock serializes concurrent toggles for the same pair.
        let existing = sqlx::query(
            "SELECT 1 FROM favorito WHERE produto_id = ? AND usuario_id = ? FOR UPDATE",
        )
        .bind(produto_id)
        .bind(usuario_id)
        .fetch_optional(&mut *tx)
        .await?;

        let favorito = if existing.is_some() {
            sqlx::query("DELETE FROM favorito WHERE produto_id = ? AND usuario_id = ?")
                .bind(produto_id)
                .bind(usuario_id)
                .execute(&mut *tx)
                .await?;
            false
        } else {
            sqlx::query("INSERT INTO favorito (produto_id, usuario_id) VALUES (?, ?)")
                .bind(produto_id)
                .bind(usuario_id)
                .execute(&mut *tx)
                .await?;
            true
        };
        tx.commit().await?;
        Ok(favorito)
    }
}

/// Product rows are opaque to this service, so they are surfaced as dynamic
/// JSON objects rather than a fixed struct.
fn row_to_json(row: &MySqlRow) -> Value {
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &MySqlRow, name: &str) -> Value {
    if let Ok(Some(n)) = row.try_get::<Option<i8>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<u64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f32>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n as f64) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(d)) = row.try_get::<Option<Decimal>, _>(name) {
        if let Some(n) = d.to_f64().and_then(serde_json::Number::from_f64) {
            return Value::Number(n);
        }
        return Value::String(d.to_string());
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}

//! Product listing: unconditional and filtered by category.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

pub async fn listar(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let produtos = state
        .store
        .list_produtos()
        .await
        .map_err(|e| AppError::store("Erro ao buscar produtos.", e))?;
    Ok(Json(produtos))
}

/// The sentinel category `"all"` returns the full catalog; anything else is an
/// exact match handled by the store.
pub async fn listar_por_categoria(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let produtos = state
        .store
        .list_produtos_por_categoria(&categoria)
        .await
        .map_err(|e| AppError::store("Erro ao buscar produtos por categoria.", e))?;
    Ok(Json(produtos))
}

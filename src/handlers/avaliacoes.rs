//! Rating handlers: create, list per product, delete.

use crate::error::AppError;
use crate::models::{AvaliacaoResumo, NovaAvaliacao};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Request body for POST /avaliacoes. Every field is optional at the wire
/// level; `validar` decides what counts as complete.
#[derive(Debug, Deserialize)]
pub struct NovaAvaliacaoBody {
    pub estrelas: Option<i32>,
    pub comentario: Option<String>,
    #[serde(rename = "produtoId")]
    pub produto_id: Option<i64>,
    #[serde(rename = "usuarioId")]
    pub usuario_id: Option<i64>,
}

impl NovaAvaliacaoBody {
    /// Incomplete means absent, null, zero or empty (the frontend's falsy
    /// values). Negative identifiers and star counts pass, as they always have.
    fn validar(self) -> Option<NovaAvaliacao> {
        Some(NovaAvaliacao {
            estrelas: self.estrelas.filter(|e| *e != 0)?,
            comentario: self.comentario.filter(|c| !c.is_empty())?,
            produto_id: self.produto_id.filter(|id| *id != 0)?,
            usuario_id: self.usuario_id.filter(|id| *id != 0)?,
        })
    }
}

pub async fn criar(
    State(state): State<AppState>,
    Json(body): Json<NovaAvaliacaoBody>,
) -> Result<Json<Value>, AppError> {
    let nova = body.validar().ok_or_else(|| {
        AppError::Validation("Dados incompletos para registrar a avaliação.".into())
    })?;
    state
        .store
        .insert_avaliacao(nova)
        .await
        .map_err(|e| AppError::store("Erro ao registrar avaliação.", e))?;
    Ok(Json(json!({ "message": "Avaliação registrada com sucesso!" })))
}

pub async fn listar_por_produto(
    State(state): State<AppState>,
    Path(produto_id): Path<i64>,
) -> Result<Json<Vec<AvaliacaoResumo>>, AppError> {
    let avaliacoes = state
        .store
        .list_avaliacoes(produto_id)
        .await
        .map_err(|e| AppError::store("Erro ao buscar avaliações.", e))?;
    Ok(Json(avaliacoes))
}

/// Not-found is decided by the affected-row count, not by a distinct store
/// error kind.
pub async fn excluir(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let removidas = state
        .store
        .delete_avaliacao(id)
        .await
        .map_err(|e| AppError::store("Erro ao excluir avaliação.", e))?;
    if removidas == 0 {
        return Err(AppError::NotFound("Avaliação não encontrada.".into()));
    }
    Ok(Json(json!({ "message": "Avaliação excluída com sucesso!" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpo(
        estrelas: Option<i32>,
        comentario: Option<&str>,
        produto_id: Option<i64>,
        usuario_id: Option<i64>,
    ) -> NovaAvaliacaoBody {
        NovaAvaliacaoBody {
            estrelas,
            comentario: comentario.map(String::from),
            produto_id,
            usuario_id,
        }
    }

    #[test]
    fn corpo_completo_passa() {
        let nova = corpo(Some(5), Some("ótimo"), Some(7), Some(3)).validar().unwrap();
        assert_eq!(nova.estrelas, 5);
        assert_eq!(nova.comentario, "ótimo");
        assert_eq!(nova.produto_id, 7);
        assert_eq!(nova.usuario_id, 3);
    }

    #[test]
    fn estrelas_zero_e_rejeitado_mesmo_com_o_resto_valido() {
        assert!(corpo(Some(0), Some("ótimo"), Some(7), Some(3)).validar().is_none());
    }

    #[test]
    fn comentario_vazio_e_rejeitado() {
        assert!(corpo(Some(5), Some(""), Some(7), Some(3)).validar().is_none());
    }

    #[test]
    fn identificadores_zero_ou_ausentes_sao_rejeitados() {
        assert!(corpo(Some(5), Some("bom"), Some(0), Some(3)).validar().is_none());
        assert!(corpo(Some(5), Some("bom"), Some(7), None).validar().is_none());
        assert!(corpo(None, Some("bom"), Some(7), Some(3)).validar().is_none());
    }
}

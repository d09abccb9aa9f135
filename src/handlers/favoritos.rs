//! Favorite toggling. This route never surfaces an HTTP error status: bad
//! input and store failures both come back as 200 with `sucesso: false`.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ToggleFavoritoBody {
    #[serde(rename = "produtoId")]
    pub produto_id: Option<i64>,
    #[serde(rename = "usuarioId")]
    pub usuario_id: Option<i64>,
}

/// `Option<Json<..>>` keeps even a malformed body on the 200 path.
pub async fn alternar(
    State(state): State<AppState>,
    body: Option<Json<ToggleFavoritoBody>>,
) -> Json<Value> {
    let campos = body.map(|Json(b)| {
        (
            b.produto_id.filter(|id| *id != 0),
            b.usuario_id.filter(|id| *id != 0),
        )
    });
    let Some((Some(produto_id), Some(usuario_id))) = campos else {
        return Json(json!({
            "sucesso": false,
            "mensagem": "Produto e usuário são obrigatórios."
        }));
    };

    match state.store.toggle_favorito(produto_id, usuario_id).await {
        Ok(favorito) => Json(json!({ "sucesso": true, "favorito": favorito })),
        Err(err) => {
            tracing::error!(error = %err, produto_id, usuario_id, "erro ao alternar favorito");
            Json(json!({
                "sucesso": false,
                "mensagem": "Erro ao atualizar favoritos."
            }))
        }
    }
}

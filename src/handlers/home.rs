//! Landing page: a connectivity probe followed by the static HTML document.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const HOME_PATH: &str = "public/views/Home.html";

pub async fn home(State(state): State<AppState>) -> Response {
    if let Err(err) = state.store.ping().await {
        tracing::error!(error = %err, "erro ao conectar no banco de dados");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao conectar no banco de dados.",
        )
            .into_response();
    }
    match tokio::fs::read_to_string(HOME_PATH).await {
        Ok(pagina) => Html(pagina).into_response(),
        Err(err) => {
            tracing::error!(error = %err, path = HOME_PATH, "erro ao ler a página inicial");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao carregar a página inicial.",
            )
                .into_response()
        }
    }
}

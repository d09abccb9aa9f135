//! Router assembly: API routes, static assets and middleware layers.

use crate::handlers::{avaliacoes, favoritos, home, produtos};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the application router. GET and DELETE on `/avaliacoes/:id` share a
/// single registration; the static tree under `public/` (with its dedicated
/// `img/` subdirectory) is served read-only around the API routes.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home::home))
        .route("/produtos", get(produtos::listar))
        .route("/produtos/categoria/:categoria", get(produtos::listar_por_categoria))
        .route("/avaliacoes", post(avaliacoes::criar))
        .route(
            "/avaliacoes/:id",
            get(avaliacoes::listar_por_produto).delete(avaliacoes::excluir),
        )
        .route("/favoritos", post(favoritos::alternar))
        .nest_service("/img", ServeDir::new("public/img"))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

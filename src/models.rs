//! Row and request shapes shared by the store and the handlers.
//!
//! Products are deliberately absent: their rows are opaque to this service and
//! travel as dynamic JSON objects straight from the store to the client.

use serde::{Deserialize, Serialize};

/// One rating as listed under a product: star count and comment, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AvaliacaoResumo {
    pub estrelas: i32,
    pub comentario: String,
}

/// A validated rating ready for insertion. The creation timestamp is assigned
/// by the store, not by this process.
#[derive(Debug, Clone)]
pub struct NovaAvaliacao {
    pub estrelas: i32,
    pub comentario: String,
    pub produto_id: i64,
    pub usuario_id: i64,
}

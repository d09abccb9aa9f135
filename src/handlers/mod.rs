//! HTTP handlers, one module per resource.

pub mod avaliacoes;
pub mod favoritos;
pub mod home;
pub mod produtos;

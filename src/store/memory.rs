//! In-memory `CatalogStore` used by tests and local development.
//!
//! Ratings carry a monotonically increasing id that stands in for the
//! store-assigned creation timestamp, so newest-first ordering matches what
//! the relational store produces. `set_offline` makes every operation fail,
//! which is how the error paths of the handlers are exercised.

use crate::error::StoreError;
use crate::models::{AvaliacaoResumo, NovaAvaliacao};
use crate::store::{CatalogStore, CATEGORIA_TODAS};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct Registro {
    id: i64,
    avaliacao: NovaAvaliacao,
}

#[derive(Default)]
struct Inner {
    produtos: Vec<Value>,
    avaliacoes: Vec<Registro>,
    favoritos: HashSet<(i64, i64)>,
    proximo_id: i64,
    offline: bool,
}

#[derive(Default)]
pub struct MemoryCatalogStore {
    inner: Mutex<Inner>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the product table. Rows are opaque JSON objects, mirroring the
    /// pass-through contract of the real store.
    pub fn with_produtos(produtos: Vec<Value>) -> Self {
        let store = Self::new();
        store.lock().produtos = produtos;
        store
    }

    /// Make every subsequent operation fail with a store error.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn online(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        let inner = self.lock();
        if inner.offline {
            return Err(StoreError::Unavailable(
                "armazenamento em memória marcado como indisponível".into(),
            ));
        }
        Ok(inner)
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.online().map(|_| ())
    }

    async fn list_produtos(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.online()?.produtos.clone())
    }

    async fn list_produtos_por_categoria(&self, categoria: &str) -> Result<Vec<Value>, StoreError> {
        let inner = self.online()?;
        if categoria == CATEGORIA_TODAS {
            return Ok(inner.produtos.clone());
        }
        Ok(inner
            .produtos
            .iter()
            .filter(|p| p.get("categoria").and_then(Value::as_str) == Some(categoria))
            .cloned()
            .collect())
    }

    async fn insert_avaliacao(&self, nova: NovaAvaliacao) -> Result<(), StoreError> {
        let mut inner = self.online()?;
        inner.proximo_id += 1;
        let id = inner.proximo_id;
        inner.avaliacoes.push(Registro {
            id,
            avaliacao: nova,
        });
        Ok(())
    }

    async fn list_avaliacoes(&self, produto_id: i64) -> Result<Vec<AvaliacaoResumo>, StoreError> {
        let inner = self.online()?;
        let mut registros: Vec<&Registro> = inner
            .avaliacoes
            .iter()
            .filter(|r| r.avaliacao.produto_id == produto_id)
            .collect();
        registros.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(registros
            .into_iter()
            .map(|r| AvaliacaoResumo {
                estrelas: r.avaliacao.estrelas,
                comentario: r.avaliacao.comentario.clone(),
            })
            .collect())
    }

    async fn delete_avaliacao(&self, avaliacao_id: i64) -> Result<u64, StoreError> {
        let mut inner = self.online()?;
        let antes = inner.avaliacoes.len();
        inner.avaliacoes.retain(|r| r.id != avaliacao_id);
        Ok((antes - inner.avaliacoes.len()) as u64)
    }

    async fn find_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError> {
        Ok(self.online()?.favoritos.contains(&(produto_id, usuario_id)))
    }

    async fn insert_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError> {
        self.online()?.favoritos.insert((produto_id, usuario_id));
        Ok(())
    }

    async fn delete_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<(), StoreError> {
        self.online()?.favoritos.remove(&(produto_id, usuario_id));
        Ok(())
    }

    async fn toggle_favorito(&self, produto_id: i64, usuario_id: i64) -> Result<bool, StoreError> {
        // One lock for the whole check-then-invert, so the toggle is atomic.
        let mut inner = self.online()?;
        let chave = (produto_id, usuario_id);
        if inner.favoritos.remove(&chave) {
            Ok(false)
        } else {
            inner.favoritos.insert(chave);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn produtos_exemplo() -> Vec<Value> {
        vec![
            json!({"id": 1, "nome": "Caneca", "categoria": "cozinha", "preco": 29.9}),
            json!({"id": 2, "nome": "Almofada", "categoria": "decoracao", "preco": 49.9}),
            json!({"id": 3, "nome": "Faqueiro", "categoria": "cozinha", "preco": 119.0}),
        ]
    }

    fn avaliacao(estrelas: i32, comentario: &str, produto_id: i64) -> NovaAvaliacao {
        NovaAvaliacao {
            estrelas,
            comentario: comentario.into(),
            produto_id,
            usuario_id: 1,
        }
    }

    #[tokio::test]
    async fn categoria_filtra_subconjunto_exato() {
        let store = MemoryCatalogStore::with_produtos(produtos_exemplo());
        let todos = store.list_produtos().await.unwrap();
        let cozinha = store.list_produtos_por_categoria("cozinha").await.unwrap();

        let esperado: Vec<&Value> = todos
            .iter()
            .filter(|p| p["categoria"] == "cozinha")
            .collect();
        assert_eq!(cozinha.iter().collect::<Vec<_>>(), esperado);
        assert_eq!(cozinha.len(), 2);
    }

    #[tokio::test]
    async fn categoria_all_equivale_a_lista_completa() {
        let store = MemoryCatalogStore::with_produtos(produtos_exemplo());
        let todos = store.list_produtos().await.unwrap();
        let via_sentinela = store.list_produtos_por_categoria("all").await.unwrap();
        assert_eq!(via_sentinela, todos);
    }

    #[tokio::test]
    async fn avaliacoes_mais_recentes_primeiro() {
        let store = MemoryCatalogStore::new();
        store.insert_avaliacao(avaliacao(3, "ok", 7)).await.unwrap();
        store.insert_avaliacao(avaliacao(5, "ótimo", 7)).await.unwrap();
        store.insert_avaliacao(avaliacao(1, "ruim", 8)).await.unwrap();

        let avaliacoes = store.list_avaliacoes(7).await.unwrap();
        assert_eq!(
            avaliacoes,
            vec![
                AvaliacaoResumo {
                    estrelas: 5,
                    comentario: "ótimo".into()
                },
                AvaliacaoResumo {
                    estrelas: 3,
                    comentario: "ok".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn produto_sem_avaliacoes_retorna_lista_vazia() {
        let store = MemoryCatalogStore::new();
        assert!(store.list_avaliacoes(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_avaliacao_informa_linhas_afetadas() {
        let store = MemoryCatalogStore::new();
        store.insert_avaliacao(avaliacao(4, "bom", 1)).await.unwrap();

        assert_eq!(store.delete_avaliacao(1).await.unwrap(), 1);
        assert_eq!(store.delete_avaliacao(1).await.unwrap(), 0);
        assert_eq!(store.delete_avaliacao(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn toggle_alterna_e_um_par_de_toggles_se_anula() {
        let store = MemoryCatalogStore::new();
        assert!(!store.find_favorito(7, 3).await.unwrap());

        assert!(store.toggle_favorito(7, 3).await.unwrap());
        assert!(store.find_favorito(7, 3).await.unwrap());

        assert!(!store.toggle_favorito(7, 3).await.unwrap());
        assert!(!store.find_favorito(7, 3).await.unwrap());
    }

    #[tokio::test]
    async fn operacoes_individuais_de_favorito() {
        let store = MemoryCatalogStore::new();
        store.insert_favorito(1, 2).await.unwrap();
        assert!(store.find_favorito(1, 2).await.unwrap());
        store.delete_favorito(1, 2).await.unwrap();
        assert!(!store.find_favorito(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn offline_propaga_erro_de_armazenamento() {
        let store = MemoryCatalogStore::with_produtos(produtos_exemplo());
        store.set_offline(true);
        assert!(store.ping().await.is_err());
        assert!(store.list_produtos().await.is_err());
        assert!(store.toggle_favorito(1, 1).await.is_err());

        store.set_offline(false);
        assert!(store.ping().await.is_ok());
    }
}

use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending confirmation nonce. Consumed by
/// `BookingRepository::confirm_booking`.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct TokenStore {
    pub id: String,
    pub nonce: String,
    pub created_at: NaiveDateTime,
}

#[async_trait]
pub trait TokenStoreRepository {
    async fn create_token_store(&self, nonce: String) -> Result<TokenStore>;
    async fn find_token_store_by_nonce(&self, nonce: String) -> Result<Option<TokenStore>>;
    async fn delete_token_store_by_nonce(&self, nonce: String) -> Result<()>;
    /// Removes nonces whose links can no longer verify. Returns how many
    /// records were removed.
    async fn delete_token_stores_created_before(&self, cutoff: NaiveDateTime) -> Result<u64>;
}

#[async_trait]
impl TokenStoreRepository for PgStore {
    async fn create_token_store(&self, nonce: String) -> Result<TokenStore> {
        sqlx::query_as::<_, TokenStore>(
            "INSERT INTO token_stores (id, nonce) VALUES ($1, $2) RETURNING *",
        )
        .bind(id::generate())
        .bind(nonce)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("create a token store record", err))
    }

    async fn find_token_store_by_nonce(&self, nonce: String) -> Result<Option<TokenStore>> {
        sqlx::query_as::<_, TokenStore>("SELECT * FROM token_stores WHERE nonce = $1")
            .bind(nonce)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a token store record by nonce", err))
    }

    async fn delete_token_store_by_nonce(&self, nonce: String) -> Result<()> {
        sqlx::query("DELETE FROM token_stores WHERE nonce = $1")
            .bind(nonce)
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("delete a token store record", err))
            .and_then(|result| match result.rows_affected() {
                0 => Err(Error::NotFound),
                _ => Ok(()),
            })
    }

    async fn delete_token_stores_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        sqlx::query("DELETE FROM token_stores WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|err| map_sqlx_error("prune stale token store records", err))
    }
}

#[async_trait]
impl TokenStoreRepository for MemoryStore {
    async fn create_token_store(&self, nonce: String) -> Result<TokenStore> {
        let mut collections = self.collections().await;
        if collections
            .token_stores
            .iter()
            .any(|token_store| token_store.nonce == nonce)
        {
            return Err(Error::AlreadyExists);
        }

        let token_store = TokenStore {
            id: id::generate(),
            nonce,
            created_at: Utc::now().naive_utc(),
        };
        collections.token_stores.push(token_store.clone());
        Ok(token_store)
    }

    async fn find_token_store_by_nonce(&self, nonce: String) -> Result<Option<TokenStore>> {
        Ok(self
            .collections()
            .await
            .token_stores
            .iter()
            .find(|token_store| token_store.nonce == nonce)
            .cloned())
    }

    async fn delete_token_store_by_nonce(&self, nonce: String) -> Result<()> {
        let mut collections = self.collections().await;
        let before = collections.token_stores.len();
        collections
            .token_stores
            .retain(|token_store| token_store.nonce != nonce);
        match collections.token_stores.len() == before {
            true => Err(Error::NotFound),
            false => Ok(()),
        }
    }

    async fn delete_token_stores_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        let mut collections = self.collections().await;
        let before = collections.token_stores.len();
        collections
            .token_stores
            .retain(|token_store| token_store.created_at >= cutoff);
        Ok((before - collections.token_stores.len()) as u64)
    }
}

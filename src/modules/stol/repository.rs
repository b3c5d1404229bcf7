use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Stol {
    pub id: String,
    pub number: i32,
    pub created_at: NaiveDateTime,
}

pub struct CreateStolPayload {
    pub number: i32,
}

#[async_trait]
pub trait StolRepository {
    async fn create_stol(&self, payload: CreateStolPayload) -> Result<Stol>;
    async fn find_stol_by_number(&self, number: i32) -> Result<Option<Stol>>;
    async fn find_many_stols(&self) -> Result<Vec<Stol>>;
}

#[async_trait]
impl StolRepository for PgStore {
    async fn create_stol(&self, payload: CreateStolPayload) -> Result<Stol> {
        sqlx::query_as::<_, Stol>("INSERT INTO stols (id, number) VALUES ($1, $2) RETURNING *")
            .bind(id::generate())
            .bind(payload.number)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("create a stol", err))
    }

    async fn find_stol_by_number(&self, number: i32) -> Result<Option<Stol>> {
        sqlx::query_as::<_, Stol>("SELECT * FROM stols WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a stol by number", err))
    }

    async fn find_many_stols(&self) -> Result<Vec<Stol>> {
        sqlx::query_as::<_, Stol>("SELECT * FROM stols ORDER BY number ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch many stols", err))
    }
}

#[async_trait]
impl StolRepository for MemoryStore {
    async fn create_stol(&self, payload: CreateStolPayload) -> Result<Stol> {
        let mut collections = self.collections().await;
        if collections
            .stols
            .iter()
            .any(|stol| stol.number == payload.number)
        {
            return Err(Error::AlreadyExists);
        }

        let stol = Stol {
            id: id::generate(),
            number: payload.number,
            created_at: Utc::now().naive_utc(),
        };
        collections.stols.push(stol.clone());
        Ok(stol)
    }

    async fn find_stol_by_number(&self, number: i32) -> Result<Option<Stol>> {
        Ok(self
            .collections()
            .await
            .stols
            .iter()
            .find(|stol| stol.number == number)
            .cloned())
    }

    async fn find_many_stols(&self) -> Result<Vec<Stol>> {
        let mut stols = self.collections().await.stols.clone();
        stols.sort_by_key(|stol| stol.number);
        Ok(stols)
    }
}

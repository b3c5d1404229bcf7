use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    pub admin_id: String,
    pub token_hash: String,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub struct CreateSessionPayload {
    pub admin_id: String,
    pub token_hash: String,
    pub expires_at: NaiveDateTime,
}

#[async_trait]
pub trait SessionRepository {
    async fn create_session(&self, payload: CreateSessionPayload) -> Result<Session>;
    async fn find_session_by_token_hash(&self, token_hash: String) -> Result<Option<Session>>;
    async fn delete_session_by_token_hash(&self, token_hash: String) -> Result<()>;
    async fn delete_sessions_expired_before(&self, now: NaiveDateTime) -> Result<u64>;
}

#[async_trait]
impl SessionRepository for PgStore {
    async fn create_session(&self, payload: CreateSessionPayload) -> Result<Session> {
        sqlx::query_as::<_, Session>(
            "
            INSERT INTO sessions (id, admin_id, token_hash, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.admin_id)
        .bind(payload.token_hash)
        .bind(payload.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("create a session", err))
    }

    async fn find_session_by_token_hash(&self, token_hash: String) -> Result<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a session by token", err))
    }

    async fn delete_session_by_token_hash(&self, token_hash: String) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("delete a session", err))
            .and_then(|result| match result.rows_affected() {
                0 => Err(Error::NotFound),
                _ => Ok(()),
            })
    }

    async fn delete_sessions_expired_before(&self, now: NaiveDateTime) -> Result<u64> {
        sqlx::query("DELETE FROM sessions WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|err| map_sqlx_error("prune expired sessions", err))
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create_session(&self, payload: CreateSessionPayload) -> Result<Session> {
        let session = Session {
            id: id::generate(),
            admin_id: payload.admin_id,
            token_hash: payload.token_hash,
            expires_at: payload.expires_at,
            created_at: Utc::now().naive_utc(),
        };
        self.collections().await.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_session_by_token_hash(&self, token_hash: String) -> Result<Option<Session>> {
        Ok(self
            .collections()
            .await
            .sessions
            .iter()
            .find(|session| session.token_hash == token_hash)
            .cloned())
    }

    async fn delete_session_by_token_hash(&self, token_hash: String) -> Result<()> {
        let mut collections = self.collections().await;
        let before = collections.sessions.len();
        collections
            .sessions
            .retain(|session| session.token_hash != token_hash);
        match collections.sessions.len() == before {
            true => Err(Error::NotFound),
            false => Ok(()),
        }
    }

    async fn delete_sessions_expired_before(&self, now: NaiveDateTime) -> Result<u64> {
        let mut collections = self.collections().await;
        let before = collections.sessions.len();
        collections.sessions.retain(|session| session.expires_at >= now);
        Ok((before - collections.sessions.len()) as u64)
    }
}

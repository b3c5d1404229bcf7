use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Admin {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateAdminPayload {
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait AdminRepository {
    async fn create_admin(&self, payload: CreateAdminPayload) -> Result<Admin>;
    /// Creates the admin only while no admin exists. Returns `None` once one
    /// does. The check and the insert are a single atomic step.
    async fn create_first_admin(&self, payload: CreateAdminPayload) -> Result<Option<Admin>>;
    async fn find_admin_by_id(&self, id: String) -> Result<Option<Admin>>;
    async fn find_admin_by_username(&self, username: String) -> Result<Option<Admin>>;
    async fn find_many_admins(&self) -> Result<Vec<Admin>>;
    async fn count_admins(&self) -> Result<i64>;
}

#[async_trait]
impl AdminRepository for PgStore {
    async fn create_admin(&self, payload: CreateAdminPayload) -> Result<Admin> {
        sqlx::query_as::<_, Admin>(
            "
            INSERT INTO admins (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.username)
        .bind(payload.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("create an admin", err))
    }

    async fn create_first_admin(&self, payload: CreateAdminPayload) -> Result<Option<Admin>> {
        let mut tx = self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {}", err);
            Error::UnexpectedError
        })?;

        // Concurrent bootstraps queue here until the first one commits.
        sqlx::query("LOCK TABLE admins IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(|err| map_sqlx_error("lock the admins table", err))?;

        let admins = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| map_sqlx_error("count admins", err))?;

        if admins > 0 {
            return Ok(None);
        }

        let admin = sqlx::query_as::<_, Admin>(
            "
            INSERT INTO admins (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.username)
        .bind(payload.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_sqlx_error("create the first admin", err))?;

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            Error::UnexpectedError
        })?;

        Ok(Some(admin))
    }

    async fn find_admin_by_id(&self, id: String) -> Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch an admin by id", err))
    }

    async fn find_admin_by_username(&self, username: String) -> Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch an admin by username", err))
    }

    async fn find_many_admins(&self) -> Result<Vec<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch many admins", err))
    }

    async fn count_admins(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("count admins", err))
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn create_admin(&self, payload: CreateAdminPayload) -> Result<Admin> {
        let mut collections = self.collections().await;
        if collections
            .admins
            .iter()
            .any(|admin| admin.username == payload.username)
        {
            return Err(Error::AlreadyExists);
        }

        let admin = Admin {
            id: id::generate(),
            username: payload.username,
            password_hash: payload.password_hash,
            created_at: Utc::now().naive_utc(),
        };
        collections.admins.push(admin.clone());
        Ok(admin)
    }

    async fn create_first_admin(&self, payload: CreateAdminPayload) -> Result<Option<Admin>> {
        let mut collections = self.collections().await;
        if !collections.admins.is_empty() {
            return Ok(None);
        }

        let admin = Admin {
            id: id::generate(),
            username: payload.username,
            password_hash: payload.password_hash,
            created_at: Utc::now().naive_utc(),
        };
        collections.admins.push(admin.clone());
        Ok(Some(admin))
    }

    async fn find_admin_by_id(&self, id: String) -> Result<Option<Admin>> {
        Ok(self
            .collections()
            .await
            .admins
            .iter()
            .find(|admin| admin.id == id)
            .cloned())
    }

    async fn find_admin_by_username(&self, username: String) -> Result<Option<Admin>> {
        Ok(self
            .collections()
            .await
            .admins
            .iter()
            .find(|admin| admin.username == username)
            .cloned())
    }

    async fn find_many_admins(&self) -> Result<Vec<Admin>> {
        Ok(self.collections().await.admins.clone())
    }

    async fn count_admins(&self) -> Result<i64> {
        Ok(self.collections().await.admins.len() as i64)
    }
}

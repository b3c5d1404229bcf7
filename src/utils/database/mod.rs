pub mod memory;
pub mod postgres;

use crate::modules::{
    admin::repository::AdminRepository, auth::repository::SessionRepository,
    booking::repository::BookingRepository, category::repository::CategoryRepository,
    meal::repository::MealRepository, stol::repository::StolRepository,
    token_store::repository::TokenStoreRepository,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    AlreadyExists,
    NotFound,
    UnexpectedError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("could not connect to {url}: {source}")]
    Connect { url: String, source: sqlx::Error },
    #[error("migrations failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Every collection the application reads or writes.
pub trait Database:
    AdminRepository
    + SessionRepository
    + CategoryRepository
    + MealRepository
    + StolRepository
    + BookingRepository
    + TokenStoreRepository
    + Send
    + Sync
{
}

impl<T> Database for T where
    T: AdminRepository
        + SessionRepository
        + CategoryRepository
        + MealRepository
        + StolRepository
        + BookingRepository
        + TokenStoreRepository
        + Send
        + Sync
{
}

const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx_error(action: &str, err: sqlx::Error) -> Error {
    if let Some(db_err) = err.as_database_error() {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            tracing::warn!("Unique constraint violated while trying to {}", action);
            return Error::AlreadyExists;
        }
    }

    tracing::error!("Error occurred while trying to {}: {}", action, err);
    Error::UnexpectedError
}

pub async fn connect(database_url: &str) -> std::result::Result<Arc<dyn Database>, ConnectError> {
    if database_url.starts_with("memory:") {
        tracing::warn!("Using the in-memory store, data will not survive a restart");
        return Ok(Arc::new(memory::MemoryStore::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await
        .map_err(|source| ConnectError::Connect {
            url: database_url.to_string(),
            source,
        })?;

    sqlx::migrate!().run(&pool).await?;
    tracing::debug!("Database migrations applied");

    Ok(Arc::new(postgres::PgStore::new(pool)))
}

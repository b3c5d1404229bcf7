use chrono::Utc;
use sha2::Digest;
use ulid::Ulid;

use crate::{
    modules::auth::repository::{CreateSessionPayload, Session},
    types::Context,
};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

/// Sessions are looked up by the SHA-256 of the bearer token, never the
/// token itself.
pub fn hash_token(token: &str) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(token.as_bytes());
    base16ct::lower::encode_string(&hasher.finalize())
}

pub async fn create_session(ctx: Arc<Context>, admin_id: String) -> Result<(String, Session)> {
    match ctx
        .db
        .delete_sessions_expired_before(Utc::now().naive_utc())
        .await
    {
        Ok(0) => {}
        Ok(pruned) => tracing::debug!("Pruned {} expired sessions", pruned),
        Err(_) => tracing::warn!("Failed to prune expired sessions"),
    }

    let access_token = Ulid::new().to_string();
    let session = ctx
        .db
        .create_session(CreateSessionPayload {
            admin_id,
            token_hash: hash_token(&access_token),
            expires_at: (Utc::now() + ctx.auth.session_ttl).naive_utc(),
        })
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok((access_token, session))
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = ctx
        .db
        .find_session_by_token_hash(hash_token(&access_token))
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn revoke_access_token(ctx: Arc<Context>, access_token: String) -> Result<()> {
    ctx.db
        .delete_session_by_token_hash(hash_token(&access_token))
        .await
        .map_err(|err| match err {
            crate::utils::database::Error::NotFound => Error::InvalidSession,
            _ => Error::UnexpectedError,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use chrono::Duration;

    #[test]
    fn token_hash_is_stable_hex() {
        let hash = hash_token("01J9ZQ3C5W4T6V7X8Y9Z0A1B2C");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_token("01J9ZQ3C5W4T6V7X8Y9Z0A1B2C"));
        assert_ne!(hash, hash_token("01J9ZQ3C5W4T6V7X8Y9Z0A1B2D"));
    }

    #[tokio::test]
    async fn sessions_verify_until_revoked() {
        let harness = test_utils::Harness::new();
        let (token, session) = create_session(harness.ctx.clone(), "admin".to_string())
            .await
            .unwrap();

        let verified = verify_access_token(harness.ctx.clone(), token.clone())
            .await
            .unwrap();
        assert_eq!(verified.id, session.id);

        revoke_access_token(harness.ctx.clone(), token.clone())
            .await
            .unwrap();
        assert_eq!(
            verify_access_token(harness.ctx.clone(), token).await.unwrap_err(),
            Error::InvalidSession
        );
    }

    #[tokio::test]
    async fn expired_sessions_are_rejected() {
        let mut harness = test_utils::Harness::new();
        Arc::make_mut(&mut harness.ctx).auth.session_ttl = Duration::seconds(-1);

        let (token, _) = create_session(harness.ctx.clone(), "admin".to_string())
            .await
            .unwrap();
        assert_eq!(
            verify_access_token(harness.ctx.clone(), token).await.unwrap_err(),
            Error::ExpiredToken
        );
    }

    #[tokio::test]
    async fn new_sessions_prune_expired_ones() {
        let mut harness = test_utils::Harness::new();
        Arc::make_mut(&mut harness.ctx).auth.session_ttl = Duration::seconds(-1);
        create_session(harness.ctx.clone(), "admin".to_string())
            .await
            .unwrap();
        create_session(harness.ctx.clone(), "admin".to_string())
            .await
            .unwrap();
        assert_eq!(harness.store.collections().await.sessions.len(), 1);

        Arc::make_mut(&mut harness.ctx).auth.session_ttl = Duration::hours(1);
        let (token, _) = create_session(harness.ctx.clone(), "admin".to_string())
            .await
            .unwrap();
        let sessions = harness.store.collections().await.sessions.clone();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].token_hash, hash_token(&token));
    }
}

use super::types::{request, response};
use crate::{
    modules::{
        admin::repository::CreateAdminPayload,
        auth::{middleware::AdminAuth, service::password},
    },
    types::Context,
    utils::database,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth: Option<AdminAuth>,
    mut payload: request::Payload,
) -> response::Response {
    // The first admin can be created without a session. This early check
    // skips hashing; `create_first_admin` decides atomically.
    if auth.is_none() {
        let admins = ctx
            .db
            .count_admins()
            .await
            .map_err(|_| response::Error::FailedToCreateAdmin)?;

        if admins > 0 {
            return Err(response::Error::Unauthorized);
        }
    }

    payload.username = payload.username.trim().to_string();
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let existing = ctx
        .db
        .find_admin_by_username(payload.username.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateAdmin)?;

    if existing.is_some() {
        return Err(response::Error::AdminAlreadyExists(payload.username));
    }

    let password_hash = password::hash_password(&payload.password).map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::FailedToCreateAdmin
    })?;

    let admin_payload = CreateAdminPayload {
        username: payload.username.clone(),
        password_hash,
    };
    let created = match auth {
        Some(_) => ctx.db.create_admin(admin_payload).await.map(Some),
        None => ctx.db.create_first_admin(admin_payload).await,
    };

    let admin = created
        .map_err(|err| match err {
            database::Error::AlreadyExists => {
                response::Error::AdminAlreadyExists(payload.username)
            }
            _ => response::Error::FailedToCreateAdmin,
        })?
        .ok_or(response::Error::Unauthorized)?;

    tracing::info!("Created admin {}", admin.username);
    Ok(response::Success::AdminCreated(admin))
}

use super::service;
use crate::modules::admin::repository::Admin;
use crate::types::Context;
use crate::utils::response;
use axum::extract::{Extension, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Response;
use axum::{async_trait, RequestPartsExt};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use serde::Serialize;
use std::sync::Arc;

enum Error {
    InvalidSession,
    UnexpectedError,
}

async fn get_admin_from_token(ctx: Arc<Context>, token: String) -> Result<Admin, Error> {
    let session = service::auth::verify_access_token(ctx.clone(), token)
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => Error::UnexpectedError,
            _ => Error::InvalidSession,
        })?;

    ctx.db
        .find_admin_by_id(session.admin_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)
}

/// An admin authenticated through `Authorization: Bearer <session token>`.
#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub admin: Admin,
    #[serde(skip_serializing)]
    pub token: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Context extension missing from request: {}", err);
                response::unexpected()
            })?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| response::unauthorized())?;
        let token = bearer.token().to_string();

        match get_admin_from_token(ctx, token.clone()).await {
            Ok(admin) => Ok(Self { admin, token }),
            Err(Error::InvalidSession) => Err(response::unauthorized()),
            Err(Error::UnexpectedError) => Err(response::unexpected()),
        }
    }
}

use super::service::service;
use super::types::request;
use crate::{
    modules::auth::middleware::AdminAuth, types::Context, utils::validation::JsonPayload,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    auth: Option<AdminAuth>,
    State(ctx): State<Arc<Context>>,
    JsonPayload(payload): JsonPayload<request::Payload>,
) -> impl IntoResponse {
    service(ctx, auth, payload).await
}

use super::service::service;
use super::types::request;
use crate::{
    modules::auth::middleware::AdminAuth, types::Context, utils::validation::JsonPayload,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    _: AdminAuth,
    Path(id): Path<String>,
    State(ctx): State<Arc<Context>>,
    JsonPayload(body): JsonPayload<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}

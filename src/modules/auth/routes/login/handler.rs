use super::service::service;
use super::types::request;
use crate::{types::Context, utils::validation::JsonPayload};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonPayload(payload): JsonPayload<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}

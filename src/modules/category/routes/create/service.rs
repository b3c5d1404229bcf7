use super::types::{request, response};
use crate::{
    modules::category::repository::CreateCategoryPayload,
    types::Context,
    utils::database,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    payload.name = payload.name.trim().to_string();
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let existing = ctx
        .db
        .find_category_by_name(payload.name.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateCategory)?;

    if existing.is_some() {
        return Err(response::Error::CategoryAlreadyExists(payload.name));
    }

    ctx.db
        .create_category(CreateCategoryPayload {
            name: payload.name.clone(),
        })
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists => {
                response::Error::CategoryAlreadyExists(payload.name.clone())
            }
            _ => response::Error::FailedToCreateCategory,
        })
        .map(response::Success::CategoryCreated)
}

use super::types::{request, response};
use crate::{
    modules::category::repository::UpdateCategoryPayload,
    types::Context,
    utils::{database, id},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    let category = ctx
        .db
        .find_category_by_id(id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    let mut body = payload.body;
    body.name = body.name.trim().to_string();
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if category.name == body.name {
        return Ok(response::Success::CategoryUnchanged);
    }

    let taken = ctx
        .db
        .find_category_by_name(body.name.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateCategory)?;

    if taken.is_some() {
        return Err(response::Error::CategoryAlreadyExists(body.name));
    }

    ctx.db
        .update_category_by_id(
            id,
            UpdateCategoryPayload {
                name: body.name.clone(),
            },
        )
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists => response::Error::CategoryAlreadyExists(body.name),
            database::Error::NotFound => response::Error::CategoryNotFound,
            database::Error::UnexpectedError => response::Error::FailedToUpdateCategory,
        })
        .map(|_| response::Success::CategoryUpdated)
}

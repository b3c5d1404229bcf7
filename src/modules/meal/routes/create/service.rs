use super::types::{request, response};
use crate::{
    modules::meal::repository::CreateMealPayload,
    types::Context,
    utils::{database, id},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    payload.name = payload.name.trim().to_string();
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let category_id =
        id::parse(&payload.category_id).ok_or(response::Error::MalformedCategoryId)?;

    ctx.db
        .find_category_by_id(category_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateMeal)?
        .ok_or(response::Error::CategoryNotFound)?;

    let existing = ctx
        .db
        .find_meal_by_name(payload.name.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateMeal)?;

    if existing.is_some() {
        return Err(response::Error::MealAlreadyExists(payload.name));
    }

    ctx.db
        .create_meal(CreateMealPayload {
            name: payload.name.clone(),
            category_id,
        })
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists => response::Error::MealAlreadyExists(payload.name),
            database::Error::NotFound => response::Error::CategoryNotFound,
            database::Error::UnexpectedError => response::Error::FailedToCreateMeal,
        })
        .map(response::Success::MealCreated)
}

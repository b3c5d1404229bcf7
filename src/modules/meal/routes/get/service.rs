use super::types::{request, response};
use crate::{types::Context, utils::id};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    ctx.db
        .find_meal_by_id(id)
        .await
        .map_err(|_| response::Error::FailedToFetchMeal)?
        .ok_or(response::Error::MealNotFound)
        .map(response::Success::Meal)
}

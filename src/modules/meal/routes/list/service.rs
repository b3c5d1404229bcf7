use super::types::response;
use crate::{types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.db
        .find_many_meals()
        .await
        .map_err(|_| response::Error::FailedToFetchMeals)
        .map(response::Success::Meals)
}

use super::types::{request, response};
use crate::{
    types::Context,
    utils::{database, id},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    ctx.db
        .delete_meal_by_id(id)
        .await
        .map_err(|err| match err {
            database::Error::NotFound => response::Error::MealNotFound,
            _ => response::Error::FailedToDeleteMeal,
        })
        .map(|_| response::Success::MealDeleted)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn deletes_once_then_reports_not_found() {
        let harness = Harness::new();
        let token = harness.admin_token().await;
        let category = harness.seed_category("Soups").await;
        let meal = harness.seed_meal("Lagman", &category.id).await;

        let uri = format!("/meal/{}/delete", meal.id);
        let (status, _) = harness.request(Method::POST, &uri, None, Some(&token)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(harness.store.collections().await.categories.len(), 1);

        let (status, _) = harness.request(Method::POST, &uri, None, Some(&token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

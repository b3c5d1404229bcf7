use super::types::{request, response};
use crate::{
    types::Context,
    utils::{database, id},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    ctx.db
        .find_category_by_id(id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    ctx.db
        .delete_category_by_id(id)
        .await
        .map_err(|err| match err {
            database::Error::NotFound => response::Error::CategoryNotFound,
            _ => response::Error::FailedToDeleteCategory,
        })
        .map(|_| response::Success::CategoryDeleted)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn deletes_the_category_and_its_meals() {
        let harness = Harness::new();
        let token = harness.admin_token().await;
        let category = harness.seed_category("Soups").await;
        harness.seed_meal("Shurpa", &category.id).await;

        let uri = format!("/category/{}/delete", category.id);
        let (status, _) = harness
            .request(Method::POST, &uri, None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        {
            let collections = harness.store.collections().await;
            assert!(collections.categories.is_empty());
            assert!(collections.meals.is_empty());
        }

        let (status, _) = harness
            .request(Method::POST, &uri, None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

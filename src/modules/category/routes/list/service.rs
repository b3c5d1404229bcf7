use super::types::response;
use crate::{types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.db
        .find_many_categories()
        .await
        .map_err(|_| response::Error::FailedToFetchCategories)
        .map(response::Success::Categories)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn categories_are_listed_with_their_meals() {
        let harness = Harness::new();
        let category = harness.seed_category("Drinks").await;
        harness.seed_meal("Ayran", &category.id).await;
        harness.seed_category("Desserts").await;

        let (status, body) = harness.request(Method::GET, "/category", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let categories = body["data"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0]["name"], json!("Drinks"));
        assert_eq!(categories[0]["meals"][0]["name"], json!("Ayran"));
        assert_eq!(categories[1]["meals"], json!([]));
    }
}

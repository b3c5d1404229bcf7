use super::types::{request, response};
use crate::{types::Context, utils::id};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    ctx.db
        .find_category_by_id(id)
        .await
        .map_err(|_| response::Error::FailedToFetchCategory)?
        .ok_or(response::Error::CategoryNotFound)
        .map(response::Success::Category)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn malformed_ids_are_rejected_whatever_is_stored() {
        let harness = Harness::new();
        harness.seed_category("Soups").await;

        for uri in ["/category/123", "/category/zzzzzzzzzzzzzzzzzzzzzzzz"] {
            let (status, body) = harness.request(Method::GET, uri, None, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["message"], json!("Url or Id is wrong!"));
        }
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let harness = Harness::new();

        let (status, body) = harness
            .request(Method::GET, "/category/65a1f0c2b3d4e5f60718293a", None, None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], json!("Category is not found!"));
    }

    #[tokio::test]
    async fn returns_the_populated_category() {
        let harness = Harness::new();
        let category = harness.seed_category("Soups").await;
        harness.seed_meal("Lagman", &category.id).await;

        let (status, body) = harness
            .request(Method::GET, &format!("/category/{}", category.id), None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category"]["id"], json!(category.id));
        assert_eq!(body["data"]["category"]["meals"][0]["name"], json!("Lagman"));
    }

    #[tokio::test]
    async fn uppercase_ids_resolve_to_the_same_category() {
        let harness = Harness::new();
        let category = harness.seed_category("Soups").await;

        let (status, body) = harness
            .request(
                Method::GET,
                &format!("/category/{}", category.id.to_ascii_uppercase()),
                None,
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category"]["id"], json!(category.id));
    }
}

use super::types::{request, response};
use crate::{
    modules::stol::repository::CreateStolPayload,
    types::Context,
    utils::database,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let existing = ctx
        .db
        .find_stol_by_number(payload.number)
        .await
        .map_err(|_| response::Error::FailedToCreateStol)?;

    if existing.is_some() {
        return Err(response::Error::StolAlreadyExists(payload.number));
    }

    ctx.db
        .create_stol(CreateStolPayload {
            number: payload.number,
        })
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists => response::Error::StolAlreadyExists(payload.number),
            _ => response::Error::FailedToCreateStol,
        })
        .map(response::Success::StolCreated)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn numbers_are_positive_and_unique() {
        let harness = Harness::new();
        let token = harness.admin_token().await;

        let (status, _) = harness
            .request(Method::POST, "/stol/create", Some(json!({"number": 0})), Some(&token))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = harness
            .request(Method::POST, "/stol/create", Some(json!({"number": 7})), Some(&token))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["stol"]["number"], json!(7));

        let (status, body) = harness
            .request(Method::POST, "/stol/create", Some(json!({"number": 7})), Some(&token))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            json!("Already exists stol with number 7")
        );
    }
}

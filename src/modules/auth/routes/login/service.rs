use super::types::{request, response};
use crate::{modules::auth::service, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let admin = ctx
        .db
        .find_admin_by_username(payload.username.trim().to_string())
        .await
        .map_err(|_| response::Error::FailedToLogin)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !service::password::verify_password(&payload.password, &admin.password_hash) {
        tracing::info!("Rejected login for {}", admin.username);
        return Err(response::Error::InvalidCredentials);
    }

    let (token, session) = service::auth::create_session(ctx.clone(), admin.id)
        .await
        .map_err(|_| response::Error::FailedToLogin)?;

    Ok(response::Success::LoggedIn {
        token,
        expires_at: session.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{Harness, ADMIN_PASSWORD, ADMIN_USERNAME};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn issued_tokens_open_admin_routes() {
        let harness = Harness::new();
        harness.admin_token().await;

        let (status, body) = harness
            .request(
                Method::POST,
                "/login",
                Some(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD})),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["data"]["token"].as_str().unwrap().to_string();
        assert!(body["data"]["expires_at"].is_string());

        let (status, _) = harness
            .request(Method::GET, "/admins", None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_credentials_are_unauthorized() {
        let harness = Harness::new();
        harness.admin_token().await;

        for (username, password) in [(ADMIN_USERNAME, "wrong-password"), ("ghost", ADMIN_PASSWORD)] {
            let (status, body) = harness
                .request(
                    Method::POST,
                    "/login",
                    Some(json!({"username": username, "password": password})),
                    None,
                )
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(
                body["error"]["message"],
                json!("Invalid username or password")
            );
        }
    }
}

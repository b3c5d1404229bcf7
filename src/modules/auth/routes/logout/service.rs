use super::types::response;
use crate::{
    modules::auth::{middleware::AdminAuth, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: AdminAuth) -> response::Response {
    service::auth::revoke_access_token(ctx, auth.token)
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => response::Error::FailedToLogout,
            _ => response::Error::InvalidSession,
        })
        .map(|_| response::Success::LoggedOut)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn logout_invalidates_the_token() {
        let harness = Harness::new();
        let token = harness.admin_token().await;

        let (status, _) = harness
            .request(Method::GET, "/logout", None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = harness
            .request(Method::GET, "/logout", None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = harness.request(Method::GET, "/admins", None, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let harness = Harness::new();

        let (status, _) = harness.request(Method::GET, "/logout", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

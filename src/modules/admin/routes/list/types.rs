pub mod response {
    use crate::{modules::admin::repository::Admin, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Admins(Vec<Admin>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Admins(admins) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Getting all admins successful.",
                        "admins": admins,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchAdmins,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchAdmins => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

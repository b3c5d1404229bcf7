pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LoggedOut,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedOut => response::success(
                    StatusCode::OK,
                    json!({ "message": "Logout successful." }),
                ),
            }
        }
    }

    pub enum Error {
        InvalidSession,
        FailedToLogout,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSession => response::unauthorized(),
                Self::FailedToLogout => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

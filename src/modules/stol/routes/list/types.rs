pub mod response {
    use crate::{modules::stol::repository::Stol, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Stols(Vec<Stol>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stols(stols) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Getting all stols successful.",
                        "stols": stols,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchStols,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchStols => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

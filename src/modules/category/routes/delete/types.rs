pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CategoryDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryDeleted => response::success(
                    StatusCode::CREATED,
                    json!({ "message": "Category has been deleted successfully." }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        CategoryNotFound,
        FailedToDeleteCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::CategoryNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Category is not found!")
                }
                Self::FailedToDeleteCategory => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

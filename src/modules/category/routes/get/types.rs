pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::category::repository::CategoryWithMeals, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Category(CategoryWithMeals),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Category(category) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Category has been fetched successfully.",
                        "category": category,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        CategoryNotFound,
        FailedToFetchCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::CategoryNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Category is not found!")
                }
                Self::FailedToFetchCategory => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

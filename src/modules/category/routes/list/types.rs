pub mod response {
    use crate::{modules::category::repository::CategoryWithMeals, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Categories(Vec<CategoryWithMeals>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Categories(categories) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Getting all categories successful.",
                        "categories": categories,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchCategories,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCategories => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod response {
    use crate::{modules::meal::repository::MealWithCategory, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Meals(Vec<MealWithCategory>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meals(meals) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Getting all meals successful.",
                        "meals": meals,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchMeals => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

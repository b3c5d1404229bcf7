pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::meal::repository::MealWithCategory, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Meal(MealWithCategory),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Meal(meal) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Meal has been fetched successfully.",
                        "meal": meal,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        MealNotFound,
        FailedToFetchMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::MealNotFound => response::failure(StatusCode::NOT_FOUND, "Meal is not found!"),
                Self::FailedToFetchMeal => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

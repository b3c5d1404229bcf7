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
        MealDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealDeleted => response::success(
                    StatusCode::CREATED,
                    json!({ "message": "Meal has been deleted successfully." }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        MealNotFound,
        FailedToDeleteMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::MealNotFound => response::failure(StatusCode::NOT_FOUND, "Meal is not found!"),
                Self::FailedToDeleteMeal => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

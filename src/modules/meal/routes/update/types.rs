pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 64,
            message = "Meal name must be between 1 and 64 characters"
        ))]
        pub name: String,
        /// Keeps the current category when absent.
        pub category_id: Option<String>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::utils::{response, validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealUnchanged,
        MealUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealUnchanged => response::success(
                    StatusCode::OK,
                    json!({ "message": "Meal has no changes." }),
                ),
                Self::MealUpdated => response::success(
                    StatusCode::CREATED,
                    json!({ "message": "Meal has been updated successfully." }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        MealNotFound,
        CategoryNotFound,
        FailedToValidate(ValidationErrors),
        MealAlreadyExists(String),
        FailedToUpdateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::MealNotFound => response::failure(StatusCode::NOT_FOUND, "Meal is not found!"),
                Self::CategoryNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Category is not found!")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::MealAlreadyExists(name) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists meal with name {}", name),
                ),
                Self::FailedToUpdateMeal => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

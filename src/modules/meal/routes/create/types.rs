pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 64,
            message = "Meal name must be between 1 and 64 characters"
        ))]
        pub name: String,
        pub category_id: String,
    }
}

pub mod response {
    use crate::{
        modules::meal::repository::Meal,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => response::success(
                    StatusCode::CREATED,
                    json!({
                        "message": "Meal has been created successfully.",
                        "meal": meal,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        MalformedCategoryId,
        CategoryNotFound,
        MealAlreadyExists(String),
        FailedToCreateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::MalformedCategoryId => response::malformed_id(),
                Self::CategoryNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Category is not found!")
                }
                Self::MealAlreadyExists(name) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists meal with name {}", name),
                ),
                Self::FailedToCreateMeal => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

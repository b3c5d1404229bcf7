pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 64,
            message = "Category name must be between 1 and 64 characters"
        ))]
        pub name: String,
    }
}

pub mod response {
    use crate::{
        modules::category::repository::Category,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        CategoryCreated(Category),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryCreated(category) => response::success(
                    StatusCode::CREATED,
                    json!({
                        "message": "Category has been created successfully.",
                        "category": category,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CategoryAlreadyExists(String),
        FailedToCreateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::CategoryAlreadyExists(name) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists category with name {}", name),
                ),
                Self::FailedToCreateCategory => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

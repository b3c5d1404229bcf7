pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 64,
            message = "Category name must be between 1 and 64 characters"
        ))]
        pub name: String,
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
        CategoryUnchanged,
        CategoryUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryUnchanged => response::success(
                    StatusCode::OK,
                    json!({ "message": "Category has no changes." }),
                ),
                Self::CategoryUpdated => response::success(
                    StatusCode::CREATED,
                    json!({ "message": "Category has been updated successfully." }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        CategoryNotFound,
        FailedToValidate(ValidationErrors),
        CategoryAlreadyExists(String),
        FailedToUpdateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::CategoryNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Category is not found!")
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::CategoryAlreadyExists(name) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists category with name {}", name),
                ),
                Self::FailedToUpdateCategory => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

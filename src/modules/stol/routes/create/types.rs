pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(range(min = 1, message = "Stol number must be a positive number"))]
        pub number: i32,
    }
}

pub mod response {
    use crate::{
        modules::stol::repository::Stol,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        StolCreated(Stol),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StolCreated(stol) => response::success(
                    StatusCode::CREATED,
                    json!({
                        "message": "Stol has been created successfully.",
                        "stol": stol,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StolAlreadyExists(i32),
        FailedToCreateStol,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StolAlreadyExists(number) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists stol with number {}", number),
                ),
                Self::FailedToCreateStol => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

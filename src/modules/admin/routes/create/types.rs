pub mod request {
    use regex::Regex;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(
            length(
                min = 3,
                max = 32,
                message = "Username must be between 3 and 32 characters"
            ),
            custom(function = "validate_username")
        )]
        pub username: String,
        #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
        pub password: String,
    }

    fn validate_username(username: &str) -> Result<(), ValidationError> {
        match Regex::new(r"^[A-Za-z0-9_]+$") {
            Ok(regex) if regex.is_match(username) => Ok(()),
            _ => Err(ValidationError::new("INVALID_USERNAME").with_message(Cow::from(
                "Username may only contain letters, digits and underscores",
            ))),
        }
    }
}

pub mod response {
    use crate::{
        modules::admin::repository::Admin,
        utils::{response, validation},
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AdminCreated(Admin),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminCreated(admin) => response::success(
                    StatusCode::CREATED,
                    json!({
                        "message": "Admin has been created successfully.",
                        "admin": admin,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        Unauthorized,
        FailedToValidate(ValidationErrors),
        AdminAlreadyExists(String),
        FailedToCreateAdmin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Unauthorized => response::unauthorized(),
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::AdminAlreadyExists(username) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!("Already exists admin with username {}", username),
                ),
                Self::FailedToCreateAdmin => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

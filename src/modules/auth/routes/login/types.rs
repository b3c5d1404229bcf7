pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(length(min = 1, message = "Username is required"))]
        pub username: String,
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
    }
}

pub mod response {
    use crate::utils::{response, validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDateTime;
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        LoggedIn {
            token: String,
            expires_at: NaiveDateTime,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn { token, expires_at } => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Login successful.",
                        "token": token,
                        "expires_at": expires_at,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        FailedToLogin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::InvalidCredentials => response::failure(
                    StatusCode::UNAUTHORIZED,
                    "Invalid username or password",
                ),
                Self::FailedToLogin => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

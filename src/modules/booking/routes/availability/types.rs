pub mod request {
    use crate::modules::booking::validation::{validate_date, validate_stol_number};
    use serde::Deserialize;
    use validator::Validate;

    /// Query values stay strings so bad input is reported like body validation.
    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(custom(function = "validate_stol_number"))]
        pub stol_number: String,
        #[validate(custom(function = "validate_date"))]
        pub date: String,
    }
}

pub mod response {
    use crate::utils::{response, validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Availability {
            available: bool,
            stol_number: i32,
            date: NaiveDate,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Availability {
                    available,
                    stol_number,
                    date,
                } => response::success(
                    StatusCode::OK,
                    json!({
                        "available": available,
                        "stol_number": stol_number,
                        "date": date,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StolNotFound,
        FailedToCheckAvailability,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StolNotFound => response::failure(StatusCode::NOT_FOUND, "Stol is not found!"),
                Self::FailedToCheckAvailability => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

pub mod request {
    use crate::modules::booking::validation::{validate_date, validate_phone};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate, Default)]
    #[serde(default)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 64,
            message = "Customer name must be between 1 and 64 characters"
        ))]
        pub customer_name: String,
        #[validate(email(message = "Email is invalid"))]
        pub email: String,
        #[validate(custom(function = "validate_phone"))]
        pub phone: String,
        #[validate(range(min = 1, message = "Stol number must be a positive number"))]
        pub stol_number: i32,
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
        VerificationSent,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::VerificationSent => response::success(
                    StatusCode::OK,
                    json!({ "message": "Verify URL has been sent to your email." }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StolNotFound,
        StolAlreadyBooked(NaiveDate),
        FailedToCreateBooking,
        FailedToSendVerification,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StolNotFound => response::failure(StatusCode::NOT_FOUND, "Stol is not found!"),
                Self::StolAlreadyBooked(date) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "Stol is already booked for {}. Please book another stol or another date!",
                        date
                    ),
                ),
                Self::FailedToCreateBooking | Self::FailedToSendVerification => {
                    response::unexpected()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

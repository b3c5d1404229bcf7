pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    pub struct Payload {
        pub token: String,
    }
}

pub mod response {
    use crate::{modules::booking::repository::BookingWithStol, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;
    use serde_json::json;

    pub enum Success {
        BookingConfirmed(BookingWithStol),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookingConfirmed(booking) => response::success(
                    StatusCode::CREATED,
                    json!({
                        "message": "Booking has been confirmed successfully.",
                        "booking": booking,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        LinkExpired,
        LinkInvalid,
        LinkAlreadyUsed,
        StolNotFound,
        StolAlreadyBooked(NaiveDate),
        FailedToConfirmBooking,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LinkExpired => {
                    response::failure(StatusCode::BAD_REQUEST, "Verification link has expired!")
                }
                Self::LinkInvalid => {
                    response::failure(StatusCode::BAD_REQUEST, "Verification link is invalid!")
                }
                Self::LinkAlreadyUsed => response::failure(
                    StatusCode::BAD_REQUEST,
                    "Verification link has already been used!",
                ),
                Self::StolNotFound => response::failure(StatusCode::NOT_FOUND, "Stol is not found!"),
                Self::StolAlreadyBooked(date) => response::failure(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "Stol is already booked for {}. Please book another stol or another date!",
                        date
                    ),
                ),
                Self::FailedToConfirmBooking => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

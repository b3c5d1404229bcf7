pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::booking::repository::BookingWithStol, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Booking(BookingWithStol),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Booking(booking) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Booking has been fetched successfully.",
                        "booking": booking,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        MalformedId,
        BookingNotFound,
        FailedToFetchBooking,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MalformedId => response::malformed_id(),
                Self::BookingNotFound => {
                    response::failure(StatusCode::NOT_FOUND, "Booking is not found!")
                }
                Self::FailedToFetchBooking => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

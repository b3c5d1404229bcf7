pub mod response {
    use crate::{modules::booking::repository::BookingWithStol, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Bookings(Vec<BookingWithStol>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Bookings(bookings) => response::success(
                    StatusCode::OK,
                    json!({
                        "message": "Getting all bookings successful.",
                        "bookings": bookings,
                    }),
                ),
            }
        }
    }

    pub enum Error {
        FailedToFetchBookings,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchBookings => response::unexpected(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

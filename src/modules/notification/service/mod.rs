pub mod email;

use crate::{modules::booking::repository::BookingWithStol, types::Context};
use chrono::NaiveDate;
use std::sync::Arc;

pub mod types {
    use super::{BookingWithStol, NaiveDate};

    #[derive(Clone)]
    pub struct BookingVerificationRequested {
        pub customer_name: String,
        pub email: String,
        pub stol_number: i32,
        pub date: NaiveDate,
        pub verify_url: String,
    }

    #[derive(Clone)]
    pub struct BookingConfirmed {
        pub booking: BookingWithStol,
    }
}

#[derive(Clone)]
pub enum Notification {
    BookingVerificationRequested(types::BookingVerificationRequested),
    BookingConfirmed(types::BookingConfirmed),
}

impl Notification {
    pub fn booking_verification_requested(
        customer_name: String,
        email: String,
        stol_number: i32,
        date: NaiveDate,
        verify_url: String,
    ) -> Self {
        Notification::BookingVerificationRequested(types::BookingVerificationRequested {
            customer_name,
            email,
            stol_number,
            date,
            verify_url,
        })
    }

    pub fn booking_confirmed(booking: BookingWithStol) -> Self {
        Notification::BookingConfirmed(types::BookingConfirmed { booking })
    }
}

#[derive(Debug)]
pub enum Error {
    NotSent,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    ctx.mailer
        .send(email::render(notification))
        .await
        .map_err(|err| {
            tracing::error!("Failed to deliver notification: {}", err);
            Error::NotSent
        })
}

use super::types::{request, response};
use crate::{
    modules::{
        booking::{
            repository::ConfirmBookingPayload,
            token::{self, PendingBooking, VerificationError},
        },
        notification::{self, service::Notification},
    },
    types::Context,
    utils::database,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let pending = token::verify::<PendingBooking>(&payload.token, &ctx.booking.token_secret)
        .map_err(|err| match err {
            VerificationError::Expired => response::Error::LinkExpired,
            VerificationError::InvalidSignature => response::Error::LinkInvalid,
        })?;

    ctx.db
        .find_token_store_by_nonce(pending.nonce.clone())
        .await
        .map_err(|_| response::Error::FailedToConfirmBooking)?
        .ok_or(response::Error::LinkAlreadyUsed)?;

    let stol = ctx
        .db
        .find_stol_by_number(pending.stol.number)
        .await
        .map_err(|_| response::Error::FailedToConfirmBooking)?
        .ok_or(response::Error::StolNotFound)?;

    let date = pending.stol.date;
    let booking = ctx
        .db
        .confirm_booking(ConfirmBookingPayload {
            customer_name: pending.customer_name,
            email: pending.email,
            phone: pending.phone,
            stol_id: stol.id.clone(),
            date,
            nonce: pending.nonce,
        })
        .await
        .map_err(|err| match err {
            database::Error::NotFound => response::Error::LinkAlreadyUsed,
            database::Error::AlreadyExists => response::Error::StolAlreadyBooked(date),
            database::Error::UnexpectedError => response::Error::FailedToConfirmBooking,
        })?
        .with_stol(stol);

    if notification::service::send(ctx.clone(), Notification::booking_confirmed(booking.clone()))
        .await
        .is_err()
    {
        tracing::warn!("Booking {} confirmed without a confirmation mail", booking.id);
    }

    Ok(response::Success::BookingConfirmed(booking))
}

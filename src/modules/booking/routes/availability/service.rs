use super::types::{request, response};
use crate::{modules::booking::validation, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate query: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let (stol_number, date) = match (
        payload.stol_number.trim().parse::<i32>().ok(),
        validation::parse_date(&payload.date),
    ) {
        (Some(stol_number), Some(date)) => (stol_number, date),
        _ => return Err(response::Error::FailedToCheckAvailability),
    };

    let stol = ctx
        .db
        .find_stol_by_number(stol_number)
        .await
        .map_err(|_| response::Error::FailedToCheckAvailability)?
        .ok_or(response::Error::StolNotFound)?;

    let available = !ctx
        .db
        .find_many_bookings_by_stol_id(stol.id)
        .await
        .map_err(|_| response::Error::FailedToCheckAvailability)?
        .iter()
        .any(|booking| booking.date == date);

    Ok(response::Success::Availability {
        available,
        stol_number,
        date,
    })
}

use super::types::{request, response};
use crate::{
    modules::{
        booking::{
            token::{self, BookingStol, PendingBooking},
            validation,
        },
        notification::{self, service::Notification},
    },
    types::Context,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    payload.customer_name = payload.customer_name.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();
    payload.phone = payload.phone.trim().to_string();
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let date = validation::parse_date(&payload.date).ok_or_else(|| {
        tracing::error!("Validated date `{}` could not be parsed", payload.date);
        response::Error::FailedToCreateBooking
    })?;

    let stol = ctx
        .db
        .find_stol_by_number(payload.stol_number)
        .await
        .map_err(|_| response::Error::FailedToCreateBooking)?
        .ok_or(response::Error::StolNotFound)?;

    let taken = ctx
        .db
        .find_many_bookings_by_stol_id(stol.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateBooking)?
        .iter()
        .any(|booking| booking.date == date);

    if taken {
        return Err(response::Error::StolAlreadyBooked(date));
    }

    let cutoff = (Utc::now() - ctx.booking.token_ttl).naive_utc();
    match ctx.db.delete_token_stores_created_before(cutoff).await {
        Ok(0) => {}
        Ok(pruned) => tracing::debug!("Pruned {} stale booking nonces", pruned),
        Err(_) => tracing::warn!("Failed to prune stale booking nonces"),
    }

    let nonce = ulid::Ulid::new().to_string();
    ctx.db
        .create_token_store(nonce.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateBooking)?;

    match send_verification(ctx.clone(), payload, stol.number, date, nonce.clone()).await {
        Ok(()) => Ok(response::Success::VerificationSent),
        Err(err) => {
            if ctx.db.delete_token_store_by_nonce(nonce).await.is_err() {
                tracing::warn!("Failed to discard the nonce of an unsent booking link");
            }
            Err(err)
        }
    }
}

/// Signs the pending booking and mails its verification link.
async fn send_verification(
    ctx: Arc<Context>,
    payload: request::Payload,
    stol_number: i32,
    date: NaiveDate,
    nonce: String,
) -> std::result::Result<(), response::Error> {
    let pending = PendingBooking {
        customer_name: payload.customer_name,
        email: payload.email,
        phone: payload.phone,
        stol: BookingStol {
            number: stol_number,
            date,
        },
        nonce,
    };

    let token = token::issue(&pending, &ctx.booking.token_secret, ctx.booking.token_ttl)
        .map_err(|err| {
            tracing::error!("Failed to issue booking token: {}", err);
            response::Error::FailedToCreateBooking
        })?;

    let verify_url = format!(
        "{}/verify/email-verification?token={}",
        ctx.app.url.trim_end_matches('/'),
        token
    );

    notification::service::send(
        ctx.clone(),
        Notification::booking_verification_requested(
            pending.customer_name,
            pending.email,
            pending.stol.number,
            pending.stol.date,
            verify_url,
        ),
    )
    .await
    .map_err(|_| response::Error::FailedToSendVerification)
}

#[cfg(test)]
mod tests {
    use crate::modules::{
        booking::token::{self, PendingBooking},
        token_store::repository::TokenStore,
    };
    use crate::test_utils::{token_from_mail, Harness};
    use crate::utils::id;
    use axum::http::{Method, StatusCode};
    use chrono::{Duration, NaiveDate, Utc};
    use serde_json::json;

    fn body(stol_number: i32, date: &str) -> serde_json::Value {
        json!({
            "customer_name": "Dilnoza",
            "email": "dilnoza@example.com",
            "phone": "+998901234567",
            "stol_number": stol_number,
            "date": date,
        })
    }

    #[tokio::test]
    async fn free_slot_mails_exactly_one_verification_link() {
        let harness = Harness::new();
        harness.seed_stol(3).await;

        let (status, response) = harness
            .request(Method::POST, "/booking/create", Some(body(3, "2026-11-02")), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response["data"]["message"],
            json!("Verify URL has been sent to your email.")
        );
        assert!(!response.to_string().contains("token"));

        let sent = harness.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "dilnoza@example.com");

        let token_stores = harness.store.collections().await.token_stores.clone();
        assert_eq!(token_stores.len(), 1);

        let pending =
            token::verify::<PendingBooking>(&token_from_mail(&sent[0]), &harness.ctx.booking.token_secret)
                .unwrap();
        assert_eq!(pending.customer_name, "Dilnoza");
        assert_eq!(pending.phone, "+998901234567");
        assert_eq!(pending.stol.number, 3);
        assert_eq!(pending.stol.date, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());
        assert_eq!(pending.nonce, token_stores[0].nonce);
    }

    #[tokio::test]
    async fn booked_date_issues_no_token_and_no_mail() {
        let harness = Harness::new();
        let stol = harness.seed_stol(3).await;
        harness
            .seed_booking(&stol, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
            .await;

        let (status, response) = harness
            .request(
                Method::POST,
                "/booking/create",
                Some(body(3, "2026-11-02T18:00:00+00:00")),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["error"]["message"],
            json!("Stol is already booked for 2026-11-02. Please book another stol or another date!")
        );
        assert!(harness.mailer.sent().is_empty());
        assert!(harness.store.collections().await.token_stores.is_empty());

        let (status, _) = harness
            .request(Method::POST, "/booking/create", Some(body(3, "2026-11-03")), None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_stol_is_not_found() {
        let harness = Harness::new();

        let (status, response) = harness
            .request(Method::POST, "/booking/create", Some(body(9, "2026-11-02")), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response["error"]["message"], json!("Stol is not found!"));
    }

    #[tokio::test]
    async fn invalid_fields_are_listed() {
        let harness = Harness::new();

        let (status, response) = harness
            .request(
                Method::POST,
                "/booking/create",
                Some(json!({"customer_name": "", "email": "nope", "phone": "x", "stol_number": 0, "date": "soon"})),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["message"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn mail_failure_is_an_unexpected_error() {
        let harness = Harness::new();
        harness.seed_stol(3).await;
        harness.mailer.set_failing(true);

        let (status, response) = harness
            .request(Method::POST, "/booking/create", Some(body(3, "2026-11-02")), None)
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["message"], json!("Sorry an error occurred"));
    }

    #[tokio::test]
    async fn failed_mail_leaves_no_nonce_behind() {
        let harness = Harness::new();
        harness.seed_stol(3).await;
        harness.mailer.set_failing(true);

        for _ in 0..3 {
            let (status, _) = harness
                .request(Method::POST, "/booking/create", Some(body(3, "2026-11-02")), None)
                .await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        assert!(harness.store.collections().await.token_stores.is_empty());

        harness.mailer.set_failing(false);
        let (status, _) = harness
            .request(Method::POST, "/booking/create", Some(body(3, "2026-11-02")), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(harness.store.collections().await.token_stores.len(), 1);
    }

    #[tokio::test]
    async fn nonces_older_than_the_link_lifetime_are_pruned() {
        let harness = Harness::new();
        harness.seed_stol(3).await;
        let fresh = harness.seed_token_store().await;
        {
            let mut collections = harness.store.collections().await;
            collections.token_stores.push(TokenStore {
                id: id::generate(),
                nonce: "stale".to_string(),
                created_at: (Utc::now() - harness.ctx.booking.token_ttl - Duration::minutes(1))
                    .naive_utc(),
            });
        }

        let (status, _) = harness
            .request(Method::POST, "/booking/create", Some(body(3, "2026-11-02")), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let nonces: Vec<String> = harness
            .store
            .collections()
            .await
            .token_stores
            .iter()
            .map(|token_store| token_store.nonce.clone())
            .collect();
        assert_eq!(nonces.len(), 2);
        assert!(nonces.contains(&fresh));
        assert!(!nonces.contains(&"stale".to_string()));
    }
}

//! Signed, expiring tokens that carry a pending booking between the request
//! and the e-mail confirmation, so nothing but the nonce is stored meanwhile.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SigningError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("failed to sign token: {0}")]
    Encode(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingStol {
    pub number: i32,
    pub date: NaiveDate,
}

/// The booking candidate embedded in a confirmation token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PendingBooking {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub stol: BookingStol,
    pub nonce: String,
}

#[derive(Serialize, Deserialize)]
struct Claims<T> {
    #[serde(flatten)]
    payload: T,
    iat: i64,
    exp: i64,
}

pub fn issue<T: Serialize>(payload: &T, secret: &str, ttl: Duration) -> Result<String, SigningError> {
    issue_at(payload, secret, ttl, Utc::now())
}

pub fn issue_at<T: Serialize>(
    payload: &T,
    secret: &str,
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, SigningError> {
    if secret.is_empty() {
        return Err(SigningError::MissingSecret);
    }

    let claims = Claims {
        payload,
        iat: issued_at.timestamp(),
        exp: (issued_at + ttl).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| SigningError::Encode(err.to_string()))
}

pub fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, VerificationError> {
    if secret.is_empty() {
        return Err(VerificationError::InvalidSignature);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims<T>>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims.payload)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => VerificationError::Expired,
            _ => {
                tracing::debug!("Rejected booking token: {}", err);
                VerificationError::InvalidSignature
            }
        })
}

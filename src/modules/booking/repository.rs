use crate::modules::stol::repository::Stol;
use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub stol_id: String,
    pub date: NaiveDate,
    pub nonce: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BookingWithStol {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub stol: Stol,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn with_stol(self, stol: Stol) -> BookingWithStol {
        BookingWithStol {
            id: self.id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            stol,
            date: self.date,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookingWithStolRow {
    id: String,
    customer_name: String,
    email: String,
    phone: String,
    date: NaiveDate,
    created_at: NaiveDateTime,
    stol_id: String,
    stol_number: i32,
    stol_created_at: NaiveDateTime,
}

impl From<BookingWithStolRow> for BookingWithStol {
    fn from(row: BookingWithStolRow) -> Self {
        Self {
            id: row.id,
            customer_name: row.customer_name,
            email: row.email,
            phone: row.phone,
            stol: Stol {
                id: row.stol_id,
                number: row.stol_number,
                created_at: row.stol_created_at,
            },
            date: row.date,
            created_at: row.created_at,
        }
    }
}

pub struct ConfirmBookingPayload {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub stol_id: String,
    pub date: NaiveDate,
    pub nonce: String,
}

#[async_trait]
pub trait BookingRepository {
    async fn find_many_bookings_by_stol_id(&self, stol_id: String) -> Result<Vec<Booking>>;
    /// Newest date first.
    async fn find_many_bookings(&self) -> Result<Vec<BookingWithStol>>;
    async fn find_booking_by_id(&self, id: String) -> Result<Option<BookingWithStol>>;
    /// Consumes the nonce and inserts the booking as one unit.
    ///
    /// `Error::NotFound` when the nonce is unknown or already consumed,
    /// `Error::AlreadyExists` when the stol is taken for that date. The nonce
    /// survives a failed confirmation.
    async fn confirm_booking(&self, payload: ConfirmBookingPayload) -> Result<Booking>;
}

const SELECT_BOOKING_WITH_STOL: &str = "
    SELECT
        bookings.id,
        bookings.customer_name,
        bookings.email,
        bookings.phone,
        bookings.date,
        bookings.created_at,
        stols.id AS stol_id,
        stols.number AS stol_number,
        stols.created_at AS stol_created_at
    FROM
        bookings
    INNER JOIN
        stols
    ON
        bookings.stol_id = stols.id
";

#[async_trait]
impl BookingRepository for PgStore {
    async fn find_many_bookings_by_stol_id(&self, stol_id: String) -> Result<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE stol_id = $1")
            .bind(stol_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch bookings of a stol", err))
    }

    async fn find_many_bookings(&self) -> Result<Vec<BookingWithStol>> {
        sqlx::query_as::<_, BookingWithStolRow>(&format!(
            "{} ORDER BY bookings.date DESC, bookings.created_at DESC",
            SELECT_BOOKING_WITH_STOL
        ))
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(BookingWithStol::from).collect())
        .map_err(|err| map_sqlx_error("fetch many bookings", err))
    }

    async fn find_booking_by_id(&self, id: String) -> Result<Option<BookingWithStol>> {
        sqlx::query_as::<_, BookingWithStolRow>(&format!(
            "{} WHERE bookings.id = $1",
            SELECT_BOOKING_WITH_STOL
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(BookingWithStol::from))
        .map_err(|err| map_sqlx_error("fetch a booking by id", err))
    }

    async fn confirm_booking(&self, payload: ConfirmBookingPayload) -> Result<Booking> {
        let mut tx = self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {}", err);
            Error::UnexpectedError
        })?;

        sqlx::query("DELETE FROM token_stores WHERE nonce = $1 RETURNING id")
            .bind(payload.nonce.clone())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| map_sqlx_error("consume a booking nonce", err))?
            .ok_or(Error::NotFound)?;

        let booking = sqlx::query_as::<_, Booking>(
            "
            INSERT INTO bookings (id, customer_name, email, phone, stol_id, date, nonce)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.customer_name)
        .bind(payload.email)
        .bind(payload.phone)
        .bind(payload.stol_id)
        .bind(payload.date)
        .bind(payload.nonce)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_sqlx_error("create a booking", err))?;

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            Error::UnexpectedError
        })?;

        Ok(booking)
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn find_many_bookings_by_stol_id(&self, stol_id: String) -> Result<Vec<Booking>> {
        Ok(self
            .collections()
            .await
            .bookings
            .iter()
            .filter(|booking| booking.stol_id == stol_id)
            .cloned()
            .collect())
    }

    async fn find_many_bookings(&self) -> Result<Vec<BookingWithStol>> {
        let collections = self.collections().await;
        let mut bookings = collections
            .bookings
            .iter()
            .filter_map(|booking| {
                collections
                    .stols
                    .iter()
                    .find(|stol| stol.id == booking.stol_id)
                    .map(|stol| booking.clone().with_stol(stol.clone()))
            })
            .collect::<Vec<_>>();
        bookings.sort_by_key(|booking| Reverse((booking.date, booking.created_at)));
        Ok(bookings)
    }

    async fn find_booking_by_id(&self, id: String) -> Result<Option<BookingWithStol>> {
        let collections = self.collections().await;
        Ok(collections
            .bookings
            .iter()
            .find(|booking| booking.id == id)
            .and_then(|booking| {
                collections
                    .stols
                    .iter()
                    .find(|stol| stol.id == booking.stol_id)
                    .map(|stol| booking.clone().with_stol(stol.clone()))
            }))
    }

    async fn confirm_booking(&self, payload: ConfirmBookingPayload) -> Result<Booking> {
        let mut collections = self.collections().await;

        let position = collections
            .token_stores
            .iter()
            .position(|token_store| token_store.nonce == payload.nonce)
            .ok_or(Error::NotFound)?;

        if collections
            .bookings
            .iter()
            .any(|booking| booking.stol_id == payload.stol_id && booking.date == payload.date)
        {
            return Err(Error::AlreadyExists);
        }

        collections.token_stores.remove(position);

        let booking = Booking {
            id: id::generate(),
            customer_name: payload.customer_name,
            email: payload.email,
            phone: payload.phone,
            stol_id: payload.stol_id,
            date: payload.date,
            nonce: payload.nonce,
            created_at: Utc::now().naive_utc(),
        };
        collections.bookings.push(booking.clone());
        Ok(booking)
    }
}

use super::types::response;
use crate::{types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.db
        .find_many_bookings()
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)
        .map(response::Success::Bookings)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn newest_dates_first_for_admins_only() {
        let harness = Harness::new();
        let stol = harness.seed_stol(3).await;
        for day in [1, 9, 4] {
            harness
                .seed_booking(&stol, NaiveDate::from_ymd_opt(2026, 11, day).unwrap())
                .await;
        }

        let (status, _) = harness.request(Method::GET, "/booking", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = harness.admin_token().await;
        let (status, body) = harness
            .request(Method::GET, "/booking", None, Some(&token))
            .await;
        assert_eq!(status, StatusCode::OK);
        let dates = body["data"]["bookings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|booking| booking["date"].clone())
            .collect::<Vec<_>>();
        assert_eq!(dates, vec![json!("2026-11-09"), json!("2026-11-04"), json!("2026-11-01")]);
        assert_eq!(body["data"]["bookings"][0]["stol"]["number"], json!(3));
    }
}

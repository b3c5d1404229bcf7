use sqlx::PgPool;

/// PostgreSQL-backed store. The repository traits are implemented next to
/// each collection's types in `modules::*::repository`.
#[derive(Clone)]
pub struct PgStore {
    pub pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{
        admin::repository::{AdminRepository, CreateAdminPayload},
        auth::repository::{CreateSessionPayload, SessionRepository},
        booking::repository::{BookingRepository, ConfirmBookingPayload},
        category::repository::{CategoryRepository, CreateCategoryPayload},
        meal::repository::{CreateMealPayload, MealRepository},
        stol::repository::{CreateStolPayload, StolRepository},
        token_store::repository::TokenStoreRepository,
    };
    use crate::utils::database::Error;
    use chrono::{Duration, NaiveDate, Utc};

    fn confirmation(stol_id: &str, nonce: &str) -> ConfirmBookingPayload {
        ConfirmBookingPayload {
            customer_name: "Dilnoza".to_string(),
            email: "dilnoza@example.com".to_string(),
            phone: "+998901234567".to_string(),
            stol_id: stol_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            nonce: nonce.to_string(),
        }
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn confirmation_consumes_the_nonce_once(pool: PgPool) {
        let store = PgStore::new(pool);
        let stol = store
            .create_stol(CreateStolPayload { number: 3 })
            .await
            .unwrap();
        store.create_token_store("n1".to_string()).await.unwrap();

        store.confirm_booking(confirmation(&stol.id, "n1")).await.unwrap();
        assert!(store
            .find_token_store_by_nonce("n1".to_string())
            .await
            .unwrap()
            .is_none());
        assert_eq!(
            store.confirm_booking(confirmation(&stol.id, "n1")).await.unwrap_err(),
            Error::NotFound
        );
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn slot_conflict_rolls_back_the_nonce(pool: PgPool) {
        let store = PgStore::new(pool);
        let stol = store
            .create_stol(CreateStolPayload { number: 3 })
            .await
            .unwrap();
        store.create_token_store("n1".to_string()).await.unwrap();
        store.create_token_store("n2".to_string()).await.unwrap();

        store.confirm_booking(confirmation(&stol.id, "n1")).await.unwrap();
        assert_eq!(
            store.confirm_booking(confirmation(&stol.id, "n2")).await.unwrap_err(),
            Error::AlreadyExists
        );
        assert!(store
            .find_token_store_by_nonce("n2".to_string())
            .await
            .unwrap()
            .is_some());
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn deleting_a_category_removes_its_meals(pool: PgPool) {
        let store = PgStore::new(pool);
        let category = store
            .create_category(CreateCategoryPayload {
                name: "Soups".to_string(),
            })
            .await
            .unwrap();
        let meal = store
            .create_meal(CreateMealPayload {
                name: "Lagman".to_string(),
                category_id: category.id.clone(),
            })
            .await
            .unwrap();

        store.delete_category_by_id(category.id).await.unwrap();
        assert!(store.find_meal_by_id(meal.id).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn pruning_drops_only_stale_rows(pool: PgPool) {
        let store = PgStore::new(pool);
        store.create_token_store("fresh".to_string()).await.unwrap();
        let pruned = store
            .delete_token_stores_created_before((Utc::now() - Duration::hours(1)).naive_utc())
            .await
            .unwrap();
        assert_eq!(pruned, 0);

        let admin = store
            .create_first_admin(CreateAdminPayload {
                username: "owner".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap()
            .unwrap();
        store
            .create_session(CreateSessionPayload {
                admin_id: admin.id,
                token_hash: "expired".to_string(),
                expires_at: (Utc::now() - Duration::minutes(1)).naive_utc(),
            })
            .await
            .unwrap();
        let pruned = store
            .delete_sessions_expired_before(Utc::now().naive_utc())
            .await
            .unwrap();
        assert_eq!(pruned, 1);
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn only_the_first_bootstrap_creates_an_admin(pool: PgPool) {
        let store = PgStore::new(pool);
        let payload = |username: &str| CreateAdminPayload {
            username: username.to_string(),
            password_hash: "hash".to_string(),
        };

        let (a, b) = tokio::join!(
            store.create_first_admin(payload("first")),
            store.create_first_admin(payload("second")),
        );
        let created = [a.unwrap(), b.unwrap()]
            .into_iter()
            .filter(Option::is_some)
            .count();
        assert_eq!(created, 1);
        assert_eq!(store.count_admins().await.unwrap(), 1);
    }
}

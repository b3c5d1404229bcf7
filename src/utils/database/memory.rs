use crate::modules::{
    admin::repository::Admin, auth::repository::Session, booking::repository::Booking,
    category::repository::Category, meal::repository::Meal, stol::repository::Stol,
    token_store::repository::TokenStore,
};
use tokio::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct Collections {
    pub admins: Vec<Admin>,
    pub sessions: Vec<Session>,
    pub categories: Vec<Category>,
    pub meals: Vec<Meal>,
    pub stols: Vec<Stol>,
    pub bookings: Vec<Booking>,
    pub token_stores: Vec<TokenStore>,
}

/// In-process store used for development (`DATABASE_URL=memory://`) and
/// tests. Each repository call takes the lock once, so multi-step writes
/// such as booking confirmation are atomic.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn collections(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().await
    }
}

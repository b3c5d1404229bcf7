use crate::{
    app::App,
    modules::{
        admin::repository::CreateAdminPayload,
        auth::service::{auth::create_session, password::hash_password},
        booking::repository::Booking,
        category::repository::{Category, CreateCategoryPayload},
        meal::repository::{CreateMealPayload, Meal},
        notification::service::email::{self, Mail, Mailer},
        stol::repository::{CreateStolPayload, Stol},
    },
    types::{AppContext, AppEnvironment, AuthContext, BookingContext, Context},
    utils::{database::memory::MemoryStore, id},
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "root";
pub const ADMIN_PASSWORD: &str = "root-password";

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Mail>>,
    failing: AtomicBool,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: Mail) -> Result<(), email::Error> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(email::Error::NotSent("mailer is down".to_string()));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// Pulls the booking token out of a verification mail.
pub fn token_from_mail(mail: &Mail) -> String {
    let start = mail.body.find("token=").unwrap() + "token=".len();
    mail.body[start..].split('"').next().unwrap().to_string()
}

pub struct Harness {
    pub ctx: Arc<Context>,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let mailer = Arc::new(RecordingMailer::default());

        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 8000,
                url: "http://localhost:8000".to_string(),
            },
            db: store.clone(),
            mailer: mailer.clone(),
            booking: BookingContext {
                token_secret: "a-test-secret-that-is-long-enough".to_string(),
                token_ttl: Duration::hours(1),
            },
            auth: AuthContext {
                session_ttl: Duration::hours(24),
            },
        });

        Self { ctx, store, mailer }
    }

    pub fn router(&self) -> Router {
        App::router(self.ctx.clone())
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Session token for the `root` admin, created on first use.
    pub async fn admin_token(&self) -> String {
        let admin = match self
            .ctx
            .db
            .find_admin_by_username(ADMIN_USERNAME.to_string())
            .await
            .unwrap()
        {
            Some(admin) => admin,
            None => self
                .ctx
                .db
                .create_admin(CreateAdminPayload {
                    username: ADMIN_USERNAME.to_string(),
                    password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
                })
                .await
                .unwrap(),
        };

        create_session(self.ctx.clone(), admin.id).await.unwrap().0
    }

    pub async fn seed_category(&self, name: &str) -> Category {
        self.ctx
            .db
            .create_category(CreateCategoryPayload {
                name: name.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn seed_meal(&self, name: &str, category_id: &str) -> Meal {
        self.ctx
            .db
            .create_meal(CreateMealPayload {
                name: name.to_string(),
                category_id: category_id.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn seed_stol(&self, number: i32) -> Stol {
        self.ctx
            .db
            .create_stol(CreateStolPayload { number })
            .await
            .unwrap()
    }

    pub async fn seed_booking(&self, stol: &Stol, date: NaiveDate) -> Booking {
        let booking = Booking {
            id: id::generate(),
            customer_name: "Aziz".to_string(),
            email: "aziz@example.com".to_string(),
            phone: "+998901112233".to_string(),
            stol_id: stol.id.clone(),
            date,
            nonce: ulid::Ulid::new().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        self.store.collections().await.bookings.push(booking.clone());
        booking
    }

    /// Stores a fresh nonce and returns it.
    pub async fn seed_token_store(&self) -> String {
        let nonce = ulid::Ulid::new().to_string();
        self.ctx.db.create_token_store(nonce.clone()).await.unwrap();
        nonce
    }
}

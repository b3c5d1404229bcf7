pub use crate::utils::database;
use crate::modules::notification::service::email::{self, LogMailer, Mailer, SmtpMailer};
use async_trait::async_trait;
use chrono::Duration;
use std::env;
use std::ops::RangeInclusive;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not set")]
    MissingVariable(&'static str),
    #[error("invalid value for {0}")]
    InvalidVariable(&'static str),
    #[error("failed to set up the database: {0}")]
    Database(#[from] database::ConnectError),
    #[error("failed to set up the mailer: {0}")]
    Mail(#[from] email::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct BookingContext {
    pub token_secret: String,
    pub token_ttl: Duration,
}

#[derive(Clone)]
pub struct AuthContext {
    pub session_ttl: Duration,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db: Arc<dyn database::Database>,
    pub mailer: Arc<dyn Mailer>,
    pub booking: BookingContext,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct BookingConfig {
    pub token_secret: String,
    pub token_ttl_minutes: i64,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub session_ttl_hours: i64,
}

#[derive(Clone)]
pub struct MailConfig {
    pub sender: String,
    pub uri: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub booking: BookingConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

/// Upper bounds keep `chrono::Duration` construction in range.
const TOKEN_TTL_MINUTES: RangeInclusive<i64> = 1..=7 * 24 * 60;
const SESSION_TTL_HOURS: RangeInclusive<i64> = 1..=365 * 24;

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, Error> {
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| Error::InvalidVariable(name)),
        None => Ok(default),
    }
}

fn parse_bounded(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: i64,
    bounds: RangeInclusive<i64>,
) -> Result<i64, Error> {
    let value = parse_var::<i64>(lookup, name, default)?;
    if !bounds.contains(&value) {
        tracing::error!(
            "{} must be between {} and {}, got {}",
            name,
            bounds.start(),
            bounds.end(),
            value
        );
        return Err(Error::InvalidVariable(name));
    }
    Ok(value)
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let database_url =
            lookup("DATABASE_URL").ok_or(Error::MissingVariable("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = parse_var::<u32>(&lookup, "PORT", 8000)?;
        let url = lookup("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let token_secret = lookup("JWT_SECRET").unwrap_or_default();
        if token_secret.is_empty() {
            tracing::warn!("JWT_SECRET not set, booking tokens cannot be issued");
        }
        let token_ttl_minutes =
            parse_bounded(&lookup, "BOOKING_TOKEN_TTL_MINUTES", 60, TOKEN_TTL_MINUTES)?;
        let session_ttl_hours = parse_bounded(&lookup, "SESSION_TTL_HOURS", 24, SESSION_TTL_HOURS)?;
        let mail_sender = lookup("MAIL_SENDER")
            .unwrap_or_else(|| "Restaurant <no-reply@localhost>".to_string());
        let mail_uri = lookup("MAIL_URI").filter(|uri| !uri.is_empty());

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url: url.trim_end_matches('/').to_string(),
            },
            booking: BookingConfig {
                token_secret,
                token_ttl_minutes,
            },
            auth: AuthConfig { session_ttl_hours },
            mail: MailConfig {
                sender: mail_sender,
                uri: mail_uri,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let db = database::connect(self.database.url.as_str()).await?;

        let mailer: Arc<dyn Mailer> = match self.mail.uri {
            Some(uri) => Arc::new(SmtpMailer::new(&self.mail.sender, &uri)?),
            None => {
                tracing::warn!("MAIL_URI not set, outgoing mail will only be logged");
                Arc::new(LogMailer)
            }
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db,
            mailer,
            booking: BookingContext {
                token_secret: self.booking.token_secret,
                token_ttl: Duration::minutes(self.booking.token_ttl_minutes),
            },
            auth: AuthContext {
                session_ttl: Duration::hours(self.auth.session_ttl_hours),
            },
        })
    }
}

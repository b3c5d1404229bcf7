pub mod admin;
pub mod auth;
pub mod booking;
pub mod category;
pub mod meal;
pub mod notification;
pub mod stol;
pub mod token_store;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(auth::routes::get_router())
        .merge(admin::routes::get_router())
        .nest("/category", category::routes::get_router())
        .nest("/meal", meal::routes::get_router())
        .nest("/stol", stol::routes::get_router())
        .nest("/booking", booking::routes::get_router())
        .merge(booking::routes::get_verify_router())
}

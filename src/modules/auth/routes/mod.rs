mod login;
mod logout;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(login::get_router())
        .merge(logout::get_router())
}

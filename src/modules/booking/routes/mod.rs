mod availability;
mod create;
mod get;
mod list;
mod verify;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(availability::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
}

/// Confirmation links are mailed out under `/verify`, outside `/booking`.
pub fn get_verify_router() -> Router<Arc<Context>> {
    verify::get_router()
}

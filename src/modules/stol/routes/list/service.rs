use super::types::response;
use crate::{types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.db
        .find_many_stols()
        .await
        .map_err(|_| response::Error::FailedToFetchStols)
        .map(response::Success::Stols)
}

use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Self::router(ctx.clone());
        Self { ctx, router }
    }

    pub fn router(ctx: Arc<Context>) -> Router {
        Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(Extension(ctx))
            .layer(DefaultBodyLimit::max(1024 * 64))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                    .allow_origin(cors::Any),
            )
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!(
            "App is running on {} ({:?}), public url {}",
            address,
            self.ctx.app.environment,
            self.ctx.app.url
        );

        axum::serve(listener, self.router).await
    }
}

// rest/mod.rs — Public REST API server.
//
// Axum HTTP server bridging the front-end chat UI to the model relay.
//
// Endpoints:
//   POST /chat/    — interactive fix-my-code turn
//   POST /regen/   — regeneration-only fix
//   GET  /health

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("relay listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    // The UI calls with credentials, and wildcard origins cannot be combined
    // with credentials, so mirror the request: any origin, method, or header
    // is echoed back as allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/chat/", post(routes::chat::chat))
        .route("/regen/", post(routes::regen::regen))
        .route("/health", get(routes::health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

//! HTTP surface: route table and server loop.

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use super::handlers::{favorites, filesystem, index, resources};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/api/browse", get(filesystem::browse))
        .route("/api/drives", get(filesystem::drives))
        .route("/api/file", get(filesystem::file))
        .route("/api/fonts", get(filesystem::fonts))
        .route(
            "/api/favorites",
            get(favorites::list)
                .post(favorites::add)
                .delete(favorites::remove),
        )
        .route("/api/hoyo/resources", get(resources::resources))
        .route("/api/hoyo/characters", get(resources::characters))
        .route("/api/hoyo/refresh", get(resources::refresh))
        .route("/api/hoyo/retry_image", get(resources::retry_image))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `addr` until `shutdown_signal` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(
    state: AppState,
    addr: &str,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

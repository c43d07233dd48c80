use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::{health, satellite};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let satellite_routes = Router::new().route(
        "/satellite-image",
        get(satellite::handlers::satellite_image)
            .options(satellite::handlers::satellite_image_preflight),
    );

    Router::new()
        .nest("/health", health_routes)
        .nest("/api/v1", satellite_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(CatchPanicLayer::custom(internal_error_response))
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}

// Anything unanticipated ends up here; the caller gets a generic message and the details
// stay in the server logs.
fn internal_error_response(panic_payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic_payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic_payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        String::from("<opaque panic payload>")
    };
    tracing::error!(error = %details, "A handler panicked while processing a request.");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "Internal server error"})),
    )
        .into_response()
}

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::{get, post, MethodRouter},
    Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::state::AppState;

use super::handlers;

/// One entry of the navigation surface: a path pattern, a stable name, and
/// the view bound to it. Matching semantics belong to the router.
pub struct NamedRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub view: MethodRouter<AppState>,
}

/// The static view table. Path parameters are handed to the bound view
/// verbatim, with no format checking here.
pub fn view_routes() -> Vec<NamedRoute> {
    vec![
        NamedRoute {
            path: "/",
            name: "home",
            view: get(handlers::home),
        },
        NamedRoute {
            path: "/analytics/{short_url}",
            name: "analytics",
            view: get(handlers::analytics),
        },
        NamedRoute {
            path: "/dashboard",
            name: "dashboard",
            view: get(handlers::dashboard),
        },
    ]
}

pub fn router(state: AppState) -> Router {
    let views = view_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, route.view)
        });

    views
        .route("/shorten", post(handlers::create_short_url))
        .route("/api/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err| async move {
                    tracing::error!("Internal error: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected error occurred. Please try again later.".to_string(),
                    )
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(200, Duration::from_secs(1))),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .latency_unit(LatencyUnit::Millis)
                        .level(Level::DEBUG),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

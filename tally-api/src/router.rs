use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(connection_pool: SqlitePool, config: &ApplicationSettings) -> Router<()> {
    let app_state = AppState::new(connection_pool);

    let app_url = config.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    Router::new()
        .route("/", get(|| async { "tally is running" }))
        .nest("/api/activities", routes::activities::router())
        .nest("/api/productions", routes::productions::router())
        .nest("/export", routes::export::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

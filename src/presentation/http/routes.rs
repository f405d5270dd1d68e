// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{api_articles, articles},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    response::Redirect,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router with the default CORS origin list.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, AppConfig::default().allowed_origins())
}

pub fn build_router_with_origins(state: HttpState, allowed_origins: &[HeaderValue]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(root))
        .route("/health", get(health))
        .route("/articles", get(articles::index).post(articles::create))
        .route("/articles/new", get(articles::new))
        .route("/articles/{id}", get(articles::show))
        .route(
            "/api/v1/articles",
            get(api_articles::list_articles).post(api_articles::create_article),
        )
        .route("/api/v1/articles/{id}", get(api_articles::get_article))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn root() -> Redirect {
    Redirect::to("/articles")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

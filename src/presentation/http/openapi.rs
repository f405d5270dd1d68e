// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, ArticleListDto};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api_articles::list_articles,
        crate::presentation::http::controllers::api_articles::get_article,
        crate::presentation::http::controllers::api_articles::create_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleDto,
            ArticleListDto,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::api_articles::ArticleAttributes,
            crate::presentation::http::controllers::api_articles::CreateArticleRequest
        )
    ),
    tags(
        (name = "Articles", description = "Blog article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog Articles API",
        description = "List, read and create blog articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

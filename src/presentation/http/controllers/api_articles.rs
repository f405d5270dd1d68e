// src/presentation/http/controllers/api_articles.rs
use crate::application::{
    dto::{ArticleDto, ArticleListDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::ArticleParams;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attributes accepted inside the `article` group. Anything else is dropped.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleAttributes {
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub article: ArticleAttributes,
}

pub fn api_article_path(id: i64) -> String {
    format!("/api/v1/articles/{id}")
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every article, oldest first.", body = ArticleListDto)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListDto>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(|items| Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(
        ("id" = i64, Path, description = "Article identifier")
    ),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body(
        content = CreateArticleRequest,
        description = "Only `article.title` and `article.text` are read; other keys are ignored. \
                       `application/x-www-form-urlencoded` with `article[title]` / `article[text]` is accepted too."
    ),
    responses(
        (status = 201, description = "Article created.", body = ArticleDto,
            headers(("Location" = String, description = "URL of the new article"))),
        (status = 400, description = "The `article` group is missing or the body is malformed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 415, description = "Unsupported content type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    params: ArticleParams,
) -> HttpResult<Response> {
    let created = state
        .services
        .article_commands
        .create_article(params.into())
        .await
        .into_http()?;

    let location = api_article_path(created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)).into_response())
}

// src/presentation/http/controllers/articles.rs
//! Browser-facing article pages.
use crate::application::queries::articles::{GetArticleByIdQuery, ListArticlesQuery};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::params::ArticleParams;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{
    Extension,
    extract::Path,
    response::{Html, Redirect},
};

fn page(rendered: Result<String, minijinja::Error>) -> HttpResult<Html<String>> {
    rendered
        .map(Html)
        .map_err(|err| HttpError::internal(format!("failed to render view: {err}")).into_html())
}

pub fn article_path(id: i64) -> String {
    format!("/articles/{id}")
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_page()?;

    page(views::render_index(&articles))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_page()?;

    page(views::render_show(&article))
}

pub async fn new() -> HttpResult<Html<String>> {
    page(views::render_new())
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    params: Result<ArticleParams, HttpError>,
) -> HttpResult<Redirect> {
    let params = params.map_err(HttpError::into_html)?;

    let created = state
        .services
        .article_commands
        .create_article(params.into())
        .await
        .into_page()?;

    Ok(Redirect::to(&article_path(created.id)))
}

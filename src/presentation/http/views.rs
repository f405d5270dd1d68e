// src/presentation/http/views.rs
//! HTML templates, embedded at compile time and rendered with `minijinja`.
//!
//! Template names end in `.html`, so the default auto-escape policy applies
//! and user supplied titles and texts are escaped on output.
use axum::http::StatusCode;
use minijinja::{Environment, context};
use serde::Serialize;
use std::sync::LazyLock;

use crate::application::dto::ArticleDto;

pub const ARTICLES_INDEX: &str = "articles/index.html";
pub const ARTICLES_SHOW: &str = "articles/show.html";
pub const ARTICLES_NEW: &str = "articles/new.html";
pub const ERROR_STATUS: &str = "errors/status.html";

const TEMPLATES: [(&str, &str); 5] = [
    ("layout.html", include_str!("../../../templates/layout.html")),
    (ARTICLES_INDEX, include_str!("../../../templates/articles/index.html")),
    (ARTICLES_SHOW, include_str!("../../../templates/articles/show.html")),
    (ARTICLES_NEW, include_str!("../../../templates/articles/new.html")),
    (ERROR_STATUS, include_str!("../../../templates/errors/status.html")),
];

static ENVIRONMENT: LazyLock<Result<Environment<'static>, minijinja::Error>> =
    LazyLock::new(build_environment);

fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn environment() -> Result<&'static Environment<'static>, minijinja::Error> {
    ENVIRONMENT.as_ref().map_err(|err| {
        minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("templates failed to load: {err}"),
        )
    })
}

/// Compile every template once. Called at start-up so broken templates fail
/// fast instead of on the first request.
pub fn ensure_loaded() -> Result<(), minijinja::Error> {
    environment().map(|_| ())
}

pub fn render(name: &str, ctx: impl Serialize) -> Result<String, minijinja::Error> {
    environment()?.get_template(name)?.render(ctx)
}

pub fn render_index(articles: &[ArticleDto]) -> Result<String, minijinja::Error> {
    render(ARTICLES_INDEX, context! { articles })
}

pub fn render_show(article: &ArticleDto) -> Result<String, minijinja::Error> {
    render(ARTICLES_SHOW, context! { article })
}

pub fn render_new() -> Result<String, minijinja::Error> {
    render(ARTICLES_NEW, context! {})
}

pub fn render_error(
    status: StatusCode,
    reason: &str,
    message: &str,
) -> Result<String, minijinja::Error> {
    render(
        ERROR_STATUS,
        context! { status => status.as_u16(), reason, message },
    )
}

use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::views;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How an error is rendered: JSON for the API, an HTML page for browser routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Json,
    Html,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    format: ErrorFormat,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(&domain_err),
        }
    }

    fn from_domain(err: &DomainError) -> Self {
        let status = match err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            format: ErrorFormat::Json,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Render this error as an HTML page instead of a JSON body.
    #[must_use]
    pub fn into_html(mut self) -> Self {
        self.format = ErrorFormat::Html;
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }

        match self.format {
            ErrorFormat::Json => {
                let payload = ErrorResponse {
                    error: self.reason().to_string(),
                    message: self.message,
                };
                (self.status, Json(payload)).into_response()
            }
            ErrorFormat::Html => match views::render_error(self.status, self.reason(), &self.message)
            {
                Ok(page) => (self.status, Html(page)).into_response(),
                Err(err) => {
                    tracing::error!(error = %err, "failed to render error page");
                    (self.status, self.message).into_response()
                }
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Same as [`IntoHttpResult::into_http`], rendering failures as HTML pages.
    fn into_page(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_page(self) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(err).into_html())
    }
}

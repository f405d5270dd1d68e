// src/presentation/http/params.rs
//! Strong parameters for the article resource.
//!
//! A create request must carry an `article` group (`article[...]` form keys or
//! an `article` JSON object). Only `title` and `text` are read from it; every
//! other key is dropped without error so callers cannot mass-assign attributes
//! the resource does not expose.
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use headers::{ContentType, HeaderMapExt};
use mime::Mime;
use serde_json::Value;
use thiserror::Error;

use crate::application::commands::articles::CreateArticleCommand;
use crate::presentation::http::error::HttpError;

const GROUP: &str = "article";
const PERMITTED: [&str; 2] = ["title", "text"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleParams {
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("param is missing or the value is empty: {0}")]
    Missing(&'static str),
    #[error("malformed request body: {0}")]
    Malformed(String),
    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),
}

impl From<ParamsError> for HttpError {
    fn from(err: ParamsError) -> Self {
        let status = match err {
            ParamsError::Missing(_) | ParamsError::Malformed(_) => StatusCode::BAD_REQUEST,
            ParamsError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        };
        Self::new(status, err.to_string())
    }
}

impl From<ArticleParams> for CreateArticleCommand {
    fn from(params: ArticleParams) -> Self {
        Self {
            title: params.title,
            text: params.text,
        }
    }
}

impl ArticleParams {
    fn permit(&mut self, key: &str, value: String) -> bool {
        match key {
            "title" => self.title = Some(value),
            "text" => self.text = Some(value),
            _ => return false,
        }
        true
    }

    /// Decode `application/x-www-form-urlencoded` pairs.
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Result<Self, ParamsError> {
        let mut params = Self::default();
        let mut group_present = false;

        for (key, value) in pairs {
            let Some(field) = group_field(&key) else {
                tracing::debug!(param = %key, "unpermitted parameter dropped");
                continue;
            };
            group_present = true;
            if !params.permit(field, value) {
                tracing::debug!(param = %key, "unpermitted parameter dropped");
            }
        }

        if group_present {
            Ok(params)
        } else {
            Err(ParamsError::Missing(GROUP))
        }
    }

    /// Decode a JSON document of the shape `{"article": {"title": .., "text": ..}}`.
    pub fn from_json(document: Value) -> Result<Self, ParamsError> {
        let Value::Object(mut root) = document else {
            return Err(ParamsError::Missing(GROUP));
        };
        let group = match root.remove(GROUP) {
            Some(Value::Object(group)) if !group.is_empty() => group,
            _ => return Err(ParamsError::Missing(GROUP)),
        };

        let mut params = Self::default();
        for (key, value) in group {
            let permitted = PERMITTED.contains(&key.as_str());
            match scalar_to_string(value) {
                Some(value) if permitted => {
                    params.permit(&key, value);
                }
                _ => tracing::debug!(param = %key, "unpermitted parameter dropped"),
            }
        }
        Ok(params)
    }

    /// Decode a body by its media type. Type and subtype compare
    /// case-insensitively; parameters such as `charset` are ignored.
    pub fn from_body(content_type: Option<&Mime>, body: &[u8]) -> Result<Self, ParamsError> {
        match content_type {
            None => Self::from_form_body(body),
            Some(media) if media.type_() == mime::APPLICATION => match media.subtype() {
                s if s == mime::WWW_FORM_URLENCODED => Self::from_form_body(body),
                s if s == mime::JSON => {
                    let document = serde_json::from_slice::<Value>(body)
                        .map_err(|err| ParamsError::Malformed(err.to_string()))?;
                    Self::from_json(document)
                }
                _ => Err(ParamsError::UnsupportedMediaType(media.essence_str().to_string())),
            },
            Some(media) => Err(ParamsError::UnsupportedMediaType(media.essence_str().to_string())),
        }
    }

    fn from_form_body(body: &[u8]) -> Result<Self, ParamsError> {
        let pairs = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .map_err(|err| ParamsError::Malformed(err.to_string()))?;
        Self::from_form_pairs(pairs)
    }
}

impl<S> FromRequest<S> for ArticleParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .typed_try_get::<ContentType>()
            .map_err(|_| ParamsError::UnsupportedMediaType("unparseable Content-Type".into()))?
            .map(Mime::from);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;

        Self::from_body(content_type.as_ref(), &body).map_err(|err| {
            if matches!(err, ParamsError::Missing(_)) {
                tracing::warn!(error = %err, "article parameters rejected");
            }
            HttpError::from(err)
        })
    }
}

/// `article[title]` -> `title`. Keys outside the group, or nested deeper than
/// one level (`article[title][]`), yield `None` or a non-permitted field.
fn group_field(key: &str) -> Option<&str> {
    key.strip_prefix(GROUP)?
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

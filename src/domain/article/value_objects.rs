use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parses an identifier taken from a URL segment.
    ///
    /// Only the canonical decimal form is accepted: ASCII digits, no sign, no
    /// whitespace, no leading zero. Anything else cannot name a stored
    /// article, so callers usually turn the error into a not-found response.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation(format!("invalid article id: {raw}"));
        if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = raw.parse::<i64>().map_err(|_| invalid())?;
        Self::new(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleText(String);

impl ArticleText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleText> for String {
    fn from(value: ArticleText) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_non_positive_values() {
        assert!(ArticleId::new(0).is_err());
        assert!(ArticleId::new(-7).is_err());
        assert_eq!(i64::from(ArticleId::new(42).unwrap()), 42);
    }

    #[test]
    fn article_id_parse_accepts_digits_only() {
        assert_eq!(i64::from(ArticleId::parse("12").unwrap()), 12);
        assert!(ArticleId::parse("new").is_err());
        assert!(ArticleId::parse("1.5").is_err());
        assert!(ArticleId::parse("0").is_err());
        assert!(ArticleId::parse("").is_err());
    }

    #[test]
    fn article_id_parse_rejects_non_canonical_forms() {
        for raw in ["+1", " 1", "1 ", "\t1", "01", "-0", "1_000", "99999999999999999999"] {
            assert!(ArticleId::parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn title_and_text_accept_empty_values() {
        assert_eq!(ArticleTitle::new("").as_str(), "");
        assert_eq!(ArticleText::new("   ").as_str(), "   ");
        assert_eq!(ArticleTitle::new("Hello").to_string(), "Hello");
    }
}

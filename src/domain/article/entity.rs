// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleText, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, text: ArticleText, now: DateTime<Utc>) -> Self {
        Self {
            title,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            text: self.text,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn new_article_stamps_both_timestamps() {
        let now = Utc::now();
        let new = NewArticle::new(ArticleTitle::new("title"), ArticleText::new("text"), now);
        assert_eq!(new.created_at, now);
        assert_eq!(new.updated_at, now);
    }

    #[test]
    fn into_article_keeps_fields() {
        let now = Utc::now();
        let article = NewArticle::new(ArticleTitle::new("title"), ArticleText::new("text"), now)
            .into_article(ArticleId::new(3).unwrap());
        assert_eq!(i64::from(article.id), 3);
        assert_eq!(article.title.as_str(), "title");
        assert_eq!(article.text.as_str(), "text");
        assert_eq!(article.created_at, now);
    }
}

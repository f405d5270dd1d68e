// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use blog_articles::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use blog_articles::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/* -------------------------------- ArticleWriteRepository -------------------------------- */

/// 常に永続化エラーを返す書き込みリポジトリ
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}

/// 受け取った NewArticle を記録する書き込みリポジトリ
#[derive(Default)]
pub struct RecordingArticleWrite {
    pub inserted: Mutex<Vec<NewArticle>>,
}

impl RecordingArticleWrite {
    pub fn inserted(&self) -> Vec<NewArticle> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for RecordingArticleWrite {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut guard = self.inserted.lock().unwrap();
        guard.push(article.clone());
        let id = ArticleId::new(i64::try_from(guard.len()).unwrap())?;
        Ok(article.into_article(id))
    }
}

/* -------------------------------- ArticleReadRepository -------------------------------- */

/// 常に空のストアとして振る舞う読み取りリポジトリ
pub struct EmptyArticleRead;

#[async_trait]
impl ArticleReadRepository for EmptyArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(vec![])
    }
}

/// 読み取りに失敗するリポジトリ
pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}

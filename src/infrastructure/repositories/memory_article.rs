use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    last_id: i64,
    articles: BTreeMap<ArticleId, Article>,
}

/// Process-local article store used when no database is configured.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Inner>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut guard = self.lock()?;
        let id = ArticleId::new(guard.last_id + 1)?;
        guard.last_id = i64::from(id);

        let stored = article.into_article(id);
        guard.articles.insert(id, stored.clone());
        drop(guard);

        tracing::debug!(article_id = %id, "article stored in memory");
        Ok(stored)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let guard = self.lock()?;
        Ok(guard.articles.get(&id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let guard = self.lock()?;
        Ok(guard.articles.values().cloned().collect())
    }
}

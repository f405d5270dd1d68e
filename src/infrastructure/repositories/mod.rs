// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod postgres_article;

pub use error::map_sqlx;
pub use memory_article::InMemoryArticleRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};

use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use sqlx::PgPool;
use std::sync::Arc;

/// The read and write halves of whichever article store was selected at start-up.
#[derive(Clone)]
pub struct ArticleRepositories {
    pub read: Arc<dyn ArticleReadRepository>,
    pub write: Arc<dyn ArticleWriteRepository>,
}

impl ArticleRepositories {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryArticleRepository::new());
        Self {
            read: Arc::clone(&store) as Arc<dyn ArticleReadRepository>,
            write: store,
        }
    }

    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
            write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        }
    }
}

// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleText, ArticleTitle, NewArticle},
};

/// Permitted article attributes. Absent values are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    text: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            text: self.text,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title.unwrap_or_default());
        let text = ArticleText::new(command.text.unwrap_or_default());
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticle::new(title, text, now))
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}

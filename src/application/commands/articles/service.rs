// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::ClockPort, domain::article::ArticleWriteRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>, clock: Arc<ClockPort>) -> Self {
        Self { write_repo, clock }
    }
}

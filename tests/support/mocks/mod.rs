// tests/support/mocks/mod.rs
pub mod article_repos;
pub mod time;

pub use article_repos::*;
pub use time::*;

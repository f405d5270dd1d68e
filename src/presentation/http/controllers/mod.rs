pub mod api_articles;
pub mod articles;

use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod slug;

pub use repo::{ArticleRepository, PgArticleRepository};
pub use repo_types::{Article, NewArticle};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::article_routes())
}

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{articles::repo_types::Article, errors::ApiError, state::AppState};

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/article", get(list_articles))
        .route("/article/", get(list_articles))
        .route("/article/:slug", get(get_article))
}

#[instrument(skip(state))]
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.articles.find_all_by_order_by_added_at_desc().await?;
    debug!(count = articles.len(), "articles listed");
    Ok(Json(articles))
}

#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let Some(article) = state.articles.find_by_slug(&slug).await? else {
        debug!(%slug, "article not found");
        return Err(ApiError::not_found(state.config.locale.article_not_found()));
    };
    Ok(Json(article))
}

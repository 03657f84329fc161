use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::users::User;

/// Article as served over HTTP, with its author embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: User,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

/// Row shape of `articles JOIN users`; author columns are prefixed.
#[derive(Debug, FromRow)]
pub struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub added_at: OffsetDateTime,
    pub author_id: i64,
    pub author_login: String,
    pub author_firstname: String,
    pub author_lastname: String,
    pub author_description: Option<String>,
}

impl From<ArticleRow> for Article {
    fn from(r: ArticleRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            slug: r.slug,
            content: r.content,
            added_at: r.added_at,
            author: User {
                id: r.author_id,
                login: r.author_login,
                firstname: r.author_firstname,
                lastname: r.author_lastname,
                description: r.author_description,
            },
        }
    }
}

/// Fields needed to insert an article. `added_at` falls back to the store's clock.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: i64,
    pub added_at: Option<OffsetDateTime>,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
            author_id,
            added_at: None,
        }
    }

    /// Same as [`NewArticle::new`] with the slug derived from the title.
    pub fn titled(title: impl Into<String>, content: impl Into<String>, author_id: i64) -> Self {
        let title = title.into();
        let slug = super::slug::to_slug(&title);
        Self::new(title, slug, content, author_id)
    }

    pub fn added_at(mut self, at: OffsetDateTime) -> Self {
        self.added_at = Some(at);
        self
    }
}

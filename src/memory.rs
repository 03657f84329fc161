use anyhow::{bail, Context};
use axum::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::articles::{Article, ArticleRepository, NewArticle};
use crate::users::{NewUser, User, UserRepository};

#[derive(Debug, Clone)]
struct StoredArticle {
    id: i64,
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    added_at: OffsetDateTime,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    articles: Vec<StoredArticle>,
    next_user_id: i64,
    next_article_id: i64,
}

impl Tables {
    fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn hydrate(&self, stored: &StoredArticle) -> anyhow::Result<Article> {
        let author = self
            .user(stored.author_id)
            .with_context(|| format!("article {} references missing user {}", stored.id, stored.author_id))?;
        Ok(Article {
            id: stored.id,
            title: stored.title.clone(),
            slug: stored.slug.clone(),
            content: stored.content.clone(),
            author: author.clone(),
            added_at: stored.added_at,
        })
    }
}

/// Process-local store implementing both repositories with the same
/// uniqueness, foreign key and ordering rules as the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.login == login).cloned())
    }

    async fn insert(&self, new: NewUser) -> anyhow::Result<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.login == new.login) {
            bail!("duplicate login {}", new.login);
        }
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            login: new.login,
            firstname: new.firstname,
            lastname: new.lastname,
            description: new.description,
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ArticleRepository for MemoryStore {
    async fn find_all_by_order_by_added_at_desc(&self) -> anyhow::Result<Vec<Article>> {
        let tables = self.tables.read().await;
        let mut stored: Vec<&StoredArticle> = tables.articles.iter().collect();
        stored.sort_by(|a, b| b.added_at.cmp(&a.added_at).then(b.id.cmp(&a.id)));
        stored.into_iter().map(|s| tables.hydrate(s)).collect()
    }

    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Article>> {
        let tables = self.tables.read().await;
        tables
            .articles
            .iter()
            .find(|a| a.slug == slug)
            .map(|s| tables.hydrate(s))
            .transpose()
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Article>> {
        let tables = self.tables.read().await;
        tables
            .articles
            .iter()
            .find(|a| a.id == id)
            .map(|s| tables.hydrate(s))
            .transpose()
    }

    async fn insert(&self, new: NewArticle) -> anyhow::Result<Article> {
        let mut tables = self.tables.write().await;
        if tables.articles.iter().any(|a| a.slug == new.slug) {
            bail!("duplicate slug {}", new.slug);
        }
        if tables.user(new.author_id).is_none() {
            bail!("unknown author {}", new.author_id);
        }
        tables.next_article_id += 1;
        let stored = StoredArticle {
            id: tables.next_article_id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            author_id: new.author_id,
            added_at: new.added_at.unwrap_or_else(OffsetDateTime::now_utc),
        };
        let article = tables.hydrate(&stored)?;
        tables.articles.push(stored);
        Ok(article)
    }
}

use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;

use crate::articles::repo_types::{Article, ArticleRow, NewArticle};

/// Read access to articles, plus the out-of-band insert used for seeding.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Newest first. Articles sharing a timestamp come out by descending id.
    async fn find_all_by_order_by_added_at_desc(&self) -> anyhow::Result<Vec<Article>>;
    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Article>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Article>>;
    async fn insert(&self, article: NewArticle) -> anyhow::Result<Article>;
}

const SELECT_ARTICLE: &str = r#"
    SELECT a.id, a.title, a.slug, a.content, a.added_at,
           u.id AS author_id,
           u.login AS author_login,
           u.firstname AS author_firstname,
           u.lastname AS author_lastname,
           u.description AS author_description
    FROM articles a
    JOIN users u ON u.id = a.author_id
"#;

impl Article {
    /// `ORDER BY added_at DESC, id DESC`
    pub async fn list_newest_first(db: &PgPool) -> anyhow::Result<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} ORDER BY a.added_at DESC, a.id DESC"
        ))
        .fetch_all(db)
        .await
        .context("select articles")?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    /// `WHERE slug = $1`
    pub async fn find_by_slug(db: &PgPool, slug: &str) -> anyhow::Result<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.slug = $1"))
            .bind(slug)
            .fetch_optional(db)
            .await
            .with_context(|| format!("select article by slug {slug}"))?;
        Ok(row.map(Article::from))
    }

    /// `WHERE id = $1`
    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .with_context(|| format!("select article {id}"))?;
        Ok(row.map(Article::from))
    }

    pub async fn create(db: &PgPool, new: &NewArticle) -> anyhow::Result<Article> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO articles (title, slug, content, author_id, added_at)
            VALUES ($1, $2, $3, $4, COALESCE($5, now()))
            RETURNING id
            "#,
        )
        .bind(&new.title)
        .bind(&new.slug)
        .bind(&new.content)
        .bind(new.author_id)
        .bind(new.added_at)
        .fetch_one(db)
        .await
        .with_context(|| format!("insert article {}", new.slug))?;

        Article::find_by_id(db, id)
            .await?
            .with_context(|| format!("article {id} missing after insert"))
    }
}

#[derive(Clone)]
pub struct PgArticleRepository {
    db: PgPool,
}

impl PgArticleRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn find_all_by_order_by_added_at_desc(&self) -> anyhow::Result<Vec<Article>> {
        Article::list_newest_first(&self.db).await
    }

    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Article>> {
        Article::find_by_slug(&self.db, slug).await
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Article>> {
        Article::find_by_id(&self.db, id).await
    }

    async fn insert(&self, article: NewArticle) -> anyhow::Result<Article> {
        Article::create(&self.db, &article).await
    }
}

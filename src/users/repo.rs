use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::{NewUser, User};

/// Read access to users, plus the out-of-band insert used for seeding.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, user: NewUser) -> anyhow::Result<User>;
}

impl User {
    /// Every user, ascending id.
    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, firstname, lastname, description
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
        .context("select users")?;
        Ok(users)
    }

    /// `WHERE login = $1`, case-sensitive.
    pub async fn find_by_login(db: &PgPool, login: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, firstname, lastname, description
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(db)
        .await
        .with_context(|| format!("select user by login {login}"))?;
        Ok(user)
    }

    pub async fn create(db: &PgPool, new: &NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (login, firstname, lastname, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, login, firstname, lastname, description
            "#,
        )
        .bind(&new.login)
        .bind(&new.firstname)
        .bind(&new.lastname)
        .bind(&new.description)
        .fetch_one(db)
        .await
        .with_context(|| format!("insert user {}", new.login))?;
        Ok(user)
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        User::find_all(&self.db).await
    }

    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
        User::find_by_login(&self.db, login).await
    }

    async fn insert(&self, user: NewUser) -> anyhow::Result<User> {
        User::create(&self.db, &user).await
    }
}

use std::sync::Arc;

use crate::articles::{ArticleRepository, PgArticleRepository};
use crate::config::{AppConfig, StoreKind};
use crate::db;
use crate::memory::MemoryStore;
use crate::users::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Opens the configured store and wires both repositories to it.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        match config.store {
            StoreKind::Postgres => {
                let pool = db::connect(&config).await?;
                db::migrate(&pool).await?;
                Ok(Self::from_parts(
                    Arc::new(PgUserRepository::new(pool.clone())),
                    Arc::new(PgArticleRepository::new(pool)),
                    Arc::new(config),
                ))
            }
            StoreKind::Memory => Ok(Self::in_memory(config)),
        }
    }

    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        articles: Arc<dyn ArticleRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            users,
            articles,
            config,
        }
    }

    /// Both repositories backed by one empty [`MemoryStore`].
    pub fn in_memory(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::from_parts(store.clone(), store, Arc::new(config))
    }
}

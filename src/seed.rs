use tracing::{debug, info};

use crate::articles::NewArticle;
use crate::state::AppState;
use crate::users::NewUser;

pub const DEMO_LOGIN: &str = "johnDoe";

/// Inserts a demo author and two articles unless the author already exists.
pub async fn seed_demo(state: &AppState) -> anyhow::Result<()> {
    if state.users.find_by_login(DEMO_LOGIN).await?.is_some() {
        debug!(login = DEMO_LOGIN, "demo data already present");
        return Ok(());
    }

    let author = state
        .users
        .insert(NewUser::new(DEMO_LOGIN, "John", "Doe"))
        .await?;
    for title in ["Lorem", "Ipsum"] {
        let article = state
            .articles
            .insert(NewArticle::titled(title, "dolor sit amet", author.id))
            .await?;
        debug!(slug = %article.slug, "demo article inserted");
    }
    info!(login = %author.login, "demo data seeded");
    Ok(())
}

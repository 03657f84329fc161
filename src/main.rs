use blog::{app, config::AppConfig, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "blog=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.listen_addr()?;
    tracing::info!(
        title = %config.blog.title,
        banner = ?config.blog.banner.title,
        store = ?config.store,
        locale = ?config.locale,
        "starting blog"
    );

    let seed_demo = config.seed_demo;
    let state = AppState::init(config).await?;
    if seed_demo {
        seed::seed_demo(&state).await?;
    }

    app::serve(app::build_app(state), addr).await
}

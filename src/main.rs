use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_catalog::app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::pool;
use movie_catalog::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_catalog=debug,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new()?;
    let db = pool::connect_to_db(&config)
        .await
        .context("failed to connect to PostgreSQL")?;

    if config.run_migrations {
        pool::run_migrations(&db)
            .await
            .context("failed to apply migrations")?;
    }

    let app = app::create_app(AppState::from_pool(db));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on http://{address}");

    axum::serve(listener, app).await?;
    Ok(())
}

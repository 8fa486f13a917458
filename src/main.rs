mod auth;
mod db;
mod error;
mod message;
mod middleware;
mod response;
mod routes;
mod state;
mod system;
mod user;

use anyhow::Context;
use db::{create_pool, run_migrations};
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jabber_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    tracing::info!("Connecting to database at {}...", config.database_url_for_logging());
    let db = create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}. Check that PostgreSQL is running and DATABASE_URL is correct",
                config.database_url_for_logging()
            )
        })?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await.context("Failed to run migrations")?;

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Serving frontend from {}", config.frontend_dir.display());

    let app = create_router(AppState::new(db, config));

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

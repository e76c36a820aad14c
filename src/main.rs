use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postboard::auth::TokenKeys;
use postboard::config::AppConfig;
use postboard::database::{DatabaseManager, PgRepository};
use postboard::{app, AppState};

#[derive(Parser)]
#[command(name = "postboard")]
#[command(about = "User accounts, bearer-token login and per-user posts over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Apply migrations and serve the HTTP API (default)")]
    Serve,

    #[command(about = "Apply pending database migrations and exit")]
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("postboard=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!("Starting postboard in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::migrate(&pool)
        .await
        .context("failed to apply migrations")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => Ok(()),
        Command::Serve => serve(config, pool).await,
    }
}

async fn serve(config: AppConfig, pool: sqlx::PgPool) -> anyhow::Result<()> {
    let tokens = TokenKeys::new(
        &config.security.jwt_secret,
        config.security.jwt_expiry_minutes,
    )
    .context("invalid token configuration")?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, Arc::new(PgRepository::new(pool)), tokens);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("postboard listening on http://{}", bind_addr);

    let service = axum::ServiceExt::<axum::extract::Request>::into_make_service(app(state));
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

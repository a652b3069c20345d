//! Approvals Engine - Main entry point.

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use approvals_engine::infrastructure::ports::RequestRepo;
use approvals_engine::infrastructure::{InMemoryRequestRepo, SqliteRequestRepo};
use approvals_engine::{api, App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "approvals_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Approvals Engine");

    let config = EngineConfig::from_env();

    let repo: Arc<dyn RequestRepo> = match &config.database_path {
        Some(path) => {
            tracing::info!("Using SQLite request store at {}", path);
            Arc::new(SqliteRequestRepo::new(path).await?)
        }
        None => {
            tracing::warn!("REQUESTS_DB not set, requests are kept in memory only");
            Arc::new(InMemoryRequestRepo::new())
        }
    };

    let app = Arc::new(App::new(repo));

    // The browser client may be served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving web client from {}", dir.display());
    }

    let router = api::http::routes(config.static_dir.as_deref())
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

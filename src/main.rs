use config::Config;
use repositories::SqliteRepo;
use routes::create_routes;
use services::{author::AuthorService, reader::ReaderService};
use session::SessionStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod session;
mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub author_service: AuthorService,
    pub reader_service: ReaderService,
}

impl AppState {
    pub fn new(config: Config, repo: SqliteRepo) -> Self {
        let sessions = SessionStore::new(chrono::Duration::hours(config.session_max_age_hours));

        Self {
            config,
            sessions,
            author_service: AuthorService::new(repo.clone()),
            reader_service: ReaderService::new(repo),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("backend_authorblog=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::init();

    let pool = match repositories::connect(&config.database_url, config.database_max_connections)
        .await
    {
        Ok(pool) => {
            tracing::info!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            tracing::error!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let db_blog = SqliteRepo::new(pool);

    if let Err(err) = db_blog.migrate().await {
        tracing::error!("🔥 Failed to run migrations: {:?}", err);
        std::process::exit(1);
    }

    let app_state = AppState::new(config.clone(), db_blog);
    let app = create_routes(Arc::new(app_state));

    let listener = match tokio::net::TcpListener::bind(format!("[::]:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("🔥 Could not bind port {}: {:?}", config.port, err);
            std::process::exit(1);
        }
    };

    tracing::info!("Blog listening on port {}", config.port);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server stopped: {:?}", err);
    }
}

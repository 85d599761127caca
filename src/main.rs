use std::sync::Arc;

use axum::routing::get;
use matchday::{
    matches,
    persistence::{InMemoryMatchRepository, MatchRepository, PostgresMatchRepository},
    AppState, ServerConfig,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchday=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matchday server");

    let config = ServerConfig::from_env();

    let repository: Arc<dyn MatchRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = match sqlx::PgPool::connect(database_url).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!(error = %e, "Failed to connect to database");
                    std::process::exit(1);
                }
            };
            let repository = PostgresMatchRepository::new(pool);
            if let Err(e) = repository.ensure_schema().await {
                error!(error = %e, "Failed to prepare database schema");
                std::process::exit(1);
            }
            info!("Using PostgreSQL match repository");
            Arc::new(repository)
        }
        None => {
            info!("DATABASE_URL not set, keeping matches in memory");
            Arc::new(InMemoryMatchRepository::new())
        }
    };

    let app_state = AppState::new(repository, config.engine.clone());

    tokio::spawn(matches::start_cleanup_task(
        app_state.registry.clone(),
        config.cleanup.clone(),
    ));

    let app = matches::router(app_state)
        .route("/", get(|| async { "matchday" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, bind_addr = %config.bind_addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(bind_addr = %config.bind_addr, "Server running");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped with error");
    }
}

//! Hole page server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use holepage::{
    catalog::Catalog,
    config::CONFIG,
    db::{self, repositories::SolutionRepository},
    handlers,
    middleware::SessionResolver,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hole page server...");

    // Load static holes and languages
    let catalog = Catalog::load(&CONFIG.catalog.path)?;
    tracing::info!(
        holes = catalog.hole_count(),
        langs = catalog.langs().len(),
        path = %CONFIG.catalog.path.display(),
        "Loaded catalog"
    );

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Create application state
    let state = AppState::new(
        Arc::new(SolutionRepository::new(db_pool)),
        catalog,
        SessionResolver::new(&CONFIG.session),
        CONFIG.assets.clone(),
    );

    let app = handlers::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// QMS API Server
// Main entry point for the quotation management REST API

mod config;
mod error;
mod handlers;
mod routes;

use config::Config;
use dotenvy::dotenv;
use qms_database::{
    CustomerRepository, Database, ProductRepository, QuotationItemRepository,
    QuotationRepository,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub struct AppState {
    pub customers: CustomerRepository,
    pub products: ProductRepository,
    pub quotations: QuotationRepository,
    pub quotation_items: QuotationItemRepository,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(database: &Database, upload_dir: PathBuf) -> Self {
        let pool = database.pool().clone();
        Self {
            customers: CustomerRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            quotations: QuotationRepository::new(pool.clone()),
            quotation_items: QuotationItemRepository::new(pool),
            upload_dir,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,qms_api=debug,tower_http=debug".to_string()),
        )
        .init();

    tracing::info!("🚀 Starting QMS API Server");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env();
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);

    // Initialize database
    tracing::info!("🗄️  Connecting to database...");
    let database = Database::new(config.database.clone()).await?;
    database.ping().await?;
    database.migrate().await?;
    tracing::info!("✅ Database connected");

    // Create app state
    let state = Arc::new(AppState::new(&database, config.upload_dir.clone()));
    tracing::info!("🖼️  Upload directory: {}", config.upload_dir.display());

    // Create router
    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("✅ Server ready at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

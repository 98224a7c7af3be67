//! Taskboard Server - GraphQL API for tasks and locations
//!
//! Provides:
//! - POST /graphql - Execute GraphQL queries and mutations
//! - GET /graphql - GraphQL playground (debug builds)
//! - GET /health - Health check with database ping

use axum::{Router, routing::get, routing::post};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_server::{TaskboardServer, api, config, storage::Storage};

/// Taskboard Server CLI arguments
#[derive(Parser, Debug)]
#[command(name = "taskboard-server")]
#[command(about = "Taskboard GraphQL HTTP Server", long_about = None)]
struct Args {
    /// Enable verbose logging (prints debug information to stdout/stderr)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing early to capture runtime logs
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "taskboard_server=debug,tower_http=debug".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "taskboard_server=info,tower_http=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .thread_name("taskboard-worker")
        .enable_all()
        .build()?;

    rt.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load configuration from env vars
    let config = config::Config::from_env();

    // Establish the single process-wide database pool before accepting
    // requests; table creation is idempotent.
    let storage = Storage::new(std::path::Path::new(&config.data_dir)).await?;
    info!("Using data directory: {}", config.data_dir);

    let server = Arc::new(TaskboardServer::new(storage));

    // Record server start time for the health endpoint
    api::health::init();

    // Build GraphQL schema with the server state as schema data
    let schema = api::graphql::create_schema(server.clone());

    // Build main router
    let app = build_router(schema, server)
        // Compression for responses (gzip, br)
        .layer(CompressionLayer::new())
        // CORS support
        .layer(CorsLayer::permissive())
        // Request/response tracing
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.addr).await?;
    info!("Taskboard Server listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble the route table. Split out of `async_main` so tests can drive
/// the router directly.
fn build_router(schema: api::graphql::GraphQLSchema, server: Arc<TaskboardServer>) -> Router {
    let router = Router::new()
        .route("/graphql", post(api::graphql::graphql_handler))
        .route(
            "/health",
            get({
                let server = server.clone();
                move || api::health::health_check(server)
            }),
        );

    #[cfg(debug_assertions)]
    let router = router.route("/graphql", get(api::graphql::graphql_playground));

    router.with_state(schema)
}

//! showbill-web - Booking directory web module
//!
//! Serves the venue/artist/show directory: browse, search, detail pages
//! and the create/edit forms, all rendered server-side.

use anyhow::Result;
use clap::Parser;
use showbill_common::config;
use showbill_common::db::init_database;
use showbill_web::{build_router, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "showbill-web", about = "Showbill booking directory web module")]
struct Args {
    /// Root folder holding showbill.db (overrides env and config file)
    #[arg(long)]
    root_folder: Option<String>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting Showbill web module v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    config::ensure_root_folder(&root_folder)?;

    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;
    info!("Database connection established");

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("showbill-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

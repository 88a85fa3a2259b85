use clap::Parser;
use savora_api::RestApi;
use savora_engine::RecommendEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// AI restaurant recommender server
#[derive(Parser, Debug)]
#[command(name = "savora")]
#[command(about = "AI restaurant recommender", long_about = None)]
struct Args {
    /// Path to the data directory holding the ingested artifacts
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Savora v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    let engine = match RecommendEngine::load(&args.data_dir) {
        Ok(engine) => {
            info!("Catalog loaded: {} restaurants", engine.catalog_len());
            if !engine.narration_enabled() {
                warn!("GROQ_API_KEY not found; analysis will be unavailable");
            }
            Some(Arc::new(engine))
        }
        Err(e) => {
            warn!("Failed to load artifacts: {e}");
            warn!("Run savora-ingest first; serving without data (requests get 503)");
            None
        }
    };

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(engine, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}

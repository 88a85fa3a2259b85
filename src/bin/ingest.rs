use anyhow::Context;
use clap::Parser;
use savora_core::FlatIndex;
use savora_engine::{TextEmbedder, DEFAULT_EMBED_DIM};
use savora_store::{read_raw_entries, save_artifacts, CatalogStore};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Offline ingestion job: raw restaurant metadata in, row-aligned artifacts out.
///
/// Both artifacts (catalog and index) come from one run; regenerate them
/// together whenever the raw data or the embedding dimension changes.
#[derive(Parser, Debug)]
#[command(name = "savora-ingest")]
#[command(about = "Build the Savora catalog and vector index", long_about = None)]
struct Args {
    /// Raw restaurant metadata, one JSON object per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the artifacts
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Embedding dimension
    #[arg(long, default_value_t = DEFAULT_EMBED_DIM)]
    embed_dim: usize,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Reading raw entries from {:?}", args.input);
    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let entries = read_raw_entries(BufReader::new(file))?;
    info!("Loaded {} records", entries.len());

    info!("Generating embeddings...");
    let embedder = TextEmbedder::new(args.embed_dim);
    let mut index = FlatIndex::new(args.embed_dim)?;
    for entry in &entries {
        index.add(&embedder.embed(&entry.embedding_text()))?;
    }
    info!("Built index: {} rows, dim {}", index.len(), index.dim());

    let catalog = CatalogStore::from_entries(entries);
    save_artifacts(&args.data_dir, &catalog, &index)?;

    info!("Ingestion complete");
    Ok(())
}

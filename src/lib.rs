//! # Savora
//!
//! An AI restaurant recommender: nearest-neighbor retrieval over an embedded
//! restaurant catalog, with a best-effort LLM-generated explanation of why
//! the matches fit.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! savora-ingest --input restaurants.jsonl --data-dir ./data
//! savora --data-dir ./data --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use savora::prelude::*;
//!
//! # async fn run() -> savora::Result<()> {
//! let engine = RecommendEngine::load(std::path::Path::new("./data"))?;
//! let result = engine.recommend(&Query::new("spicy italian in indiranagar", 5)).await?;
//! for restaurant in &result.restaurants {
//!     println!("{} ({})", restaurant.name, restaurant.location);
//! }
//! println!("{}", result.ai_analysis);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`savora-core`](savora_core) - vectors and the flat nearest-neighbor index
//! - [`savora-store`](savora_store) - catalog records and persisted artifacts
//! - [`savora-engine`](savora_engine) - the recommendation pipeline and narrator
//! - [`savora-api`](savora_api) - the REST surface

// Re-export core types
pub use savora_core::{FlatIndex, Vector};

// Re-export catalog layer
pub use savora_store::{
    load_artifacts, read_raw_entries, save_artifacts, CatalogEntry, CatalogStore, RawEntry,
    CATALOG_FILE, INDEX_FILE,
};

// Re-export the pipeline
pub use savora_engine::{
    Error, Narrator, Query, Recommendation, RecommendEngine, Result, TextEmbedder,
    ANALYSIS_UNAVAILABLE, DEFAULT_EMBED_DIM, DEFAULT_TOP_K, OVERSAMPLE_FACTOR,
};

// Re-export API
pub use savora_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogEntry, CatalogStore, Error, FlatIndex, Narrator, Query, Recommendation,
        RecommendEngine, RestApi, Result, TextEmbedder, Vector,
    };
}

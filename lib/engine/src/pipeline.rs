use crate::{Error, Narrator, Result, TextEmbedder};
use ahash::AHashSet;
use savora_core::FlatIndex;
use savora_store::{load_artifacts, CatalogEntry, CatalogStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default number of distinct-named results per request
pub const DEFAULT_TOP_K: usize = 5;

/// Multiplier applied to `top_k` when querying the index, so deduplication
/// has spare candidates to consume
pub const OVERSAMPLE_FACTOR: usize = 3;

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// One recommendation request
#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Query {
    pub fn new(text: impl Into<String>, top_k: usize) -> Self {
        Self {
            text: text.into(),
            top_k,
        }
    }

    /// Client-input validation, run before any pipeline work.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidQuery(
                "query text must not be empty".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidQuery("top_k must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// The pipeline's output: at most `top_k` distinct-named restaurants plus an
/// analysis string that is always present
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub restaurants: Vec<CatalogEntry>,
    pub ai_analysis: String,
}

/// The recommendation pipeline.
///
/// Construction requires loaded, non-empty catalog and index; a request can
/// therefore never observe a half-initialized engine. All state is read-only
/// after construction.
pub struct RecommendEngine {
    catalog: CatalogStore,
    index: FlatIndex,
    embedder: TextEmbedder,
    narrator: Narrator,
}

impl std::fmt::Debug for RecommendEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendEngine")
            .field("catalog", &self.catalog)
            .field("index", &self.index)
            .field("embedder", &self.embedder)
            .field("narration_enabled", &self.narrator.is_enabled())
            .finish()
    }
}

impl RecommendEngine {
    pub fn new(
        catalog: CatalogStore,
        index: FlatIndex,
        embedder: TextEmbedder,
        narrator: Narrator,
    ) -> Result<Self> {
        if catalog.is_empty() || index.is_empty() {
            return Err(Error::Uninitialized);
        }

        Ok(Self {
            catalog,
            index,
            embedder,
            narrator,
        })
    }

    /// Load artifacts from `data_dir` and assemble the engine.
    ///
    /// The embedder is sized from the loaded index so query vectors always
    /// match the ingestion run; the narrator is configured from the
    /// environment.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let (catalog, index) = load_artifacts(data_dir)?;
        let embedder = TextEmbedder::new(index.dim());
        Self::new(catalog, index, embedder, Narrator::from_env())
    }

    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn narration_enabled(&self) -> bool {
        self.narrator.is_enabled()
    }

    /// Answer one query: embed, search, deduplicate, truncate, narrate.
    pub async fn recommend(&self, query: &Query) -> Result<Recommendation> {
        query.validate()?;

        let search_k = query.top_k.saturating_mul(OVERSAMPLE_FACTOR);
        let vector = self.embedder.embed(&query.text);
        let candidates = self.index.search(&vector, search_k)?;
        debug!(
            candidates = candidates.len(),
            search_k, "Vector search complete"
        );

        let mut seen_names: AHashSet<String> = AHashSet::new();
        let mut restaurants: Vec<CatalogEntry> = Vec::new();

        for (position, _distance) in candidates {
            // Out-of-range positions are skipped, not errors.
            let Some(entry) = self.catalog.get(position) else {
                continue;
            };

            if !seen_names.insert(entry.name.clone()) {
                continue;
            }

            restaurants.push(entry.clone());
            if restaurants.len() == query.top_k {
                break;
            }
        }

        // Narration sees only the final display set, never raw candidates.
        let ai_analysis = self.narrator.narrate(&query.text, &restaurants).await;

        Ok(Recommendation {
            restaurants,
            ai_analysis,
        })
    }
}

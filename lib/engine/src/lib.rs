//! Recommendation pipeline for the Savora recommender.
//!
//! One [`RecommendEngine::recommend`] call runs a strictly linear flow:
//! embed the query text, search the flat index for `top_k * 3` neighbors,
//! walk them in ascending-distance order dropping duplicate names and
//! out-of-range positions, stop at `top_k` distinct restaurants, then hand
//! the final list to the [`Narrator`] for a best-effort natural-language
//! explanation. The narration can degrade to a fixed string but the caller
//! always gets one.
//!
//! The engine is immutable after construction and safe to share behind an
//! `Arc`; concurrent `recommend` calls need no synchronization.

mod embedder;
mod error;
mod narrator;
mod pipeline;

pub use embedder::{TextEmbedder, DEFAULT_EMBED_DIM};
pub use error::{Error, Result};
pub use narrator::{
    ChatModel, GroqClient, Narrator, ANALYSIS_ERROR_PREFIX, ANALYSIS_UNAVAILABLE,
};
pub use pipeline::{Query, Recommendation, RecommendEngine, DEFAULT_TOP_K, OVERSAMPLE_FACTOR};

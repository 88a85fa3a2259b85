//! REST API for the Savora recommender.
//!
//! Thin glue over [`savora_engine::RecommendEngine`]: one recommendation
//! endpoint and a health check. The engine arrives as
//! `Option<Arc<RecommendEngine>>` so a server whose artifacts never loaded
//! still answers - with 503, not an empty success.

mod rest;

pub use rest::RestApi;

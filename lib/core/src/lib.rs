//! Core data structures for the Savora recommender.
//!
//! This crate holds the two building blocks every other crate works with:
//!
//! - [`Vector`] - a fixed-dimension f32 vector with L2 distance
//! - [`FlatIndex`] - an exhaustive nearest-neighbor index over row-aligned
//!   vectors, returning `(position, distance)` pairs in ascending-distance
//!   order
//!
//! Positions returned by the index are row numbers into whatever table the
//! index was built against; keeping the two row-aligned is the caller's
//! contract.

mod error;
mod index;
mod vector;

pub use error::{Error, Result};
pub use index::FlatIndex;
pub use vector::Vector;

use crate::{Error, Result, Vector};
use serde::{Deserialize, Serialize};

/// An exhaustive nearest-neighbor index over row-aligned vectors.
///
/// Rows are stored in insertion order in one contiguous buffer; the position
/// returned by [`FlatIndex::search`] is the row number, which callers use to
/// look up the record the row was built from. A flat scan is exact and, for a
/// catalog that fits in memory, fast enough that an approximate index would
/// only add moving parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatIndex {
    dim: usize,
    data: Vec<f32>,
}

impl FlatIndex {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidConfig(
                "index dimension must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            dim,
            data: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of rows in the index
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a row, returning its position
    pub fn add(&mut self, vector: &Vector) -> Result<usize> {
        if vector.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: vector.dim(),
            });
        }
        let position = self.len();
        self.data.extend_from_slice(vector.as_slice());
        Ok(position)
    }

    #[inline]
    fn row(&self, position: usize) -> &[f32] {
        let start = position * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Find the `k` rows nearest to `query` by L2 distance.
    ///
    /// Results are ordered by ascending distance, ties broken by position,
    /// and truncated to `min(k, len)`. Every returned position is a valid
    /// row number; the index never emits sentinels.
    pub fn search(&self, query: &Vector, k: usize) -> Result<Vec<(usize, f32)>> {
        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let q = query.as_slice();
        let mut scored: Vec<(usize, f32)> = (0..self.len())
            .map(|position| {
                let distance = self
                    .row(position)
                    .iter()
                    .zip(q.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f32>()
                    .sqrt();
                (position, distance)
            })
            .collect();

        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }
}

//! Hash-range bundle boundaries for namespace sharding
//!
//! A namespace's topics are spread across brokers in contiguous ranges
//! ("bundles") of the 32-bit topic-hash space. [`BundlesData`] is the
//! stored shape of that partitioning: an ascending list of boundary
//! markers, each the `0x`-prefixed hex form of an unsigned 32-bit value.
//! Consecutive markers delimit one bundle, so `n + 1` markers define `n`
//! bundles covering the space with no gaps or overlaps.
//!
//! Topic-to-bundle assignment (hashing a topic name and locating its
//! range) is broker-side logic outside this crate; this type only
//! guarantees the ranges themselves are well-formed, and only when
//! [`validate`] is called. Decoding never validates, so records written
//! by older or foreign tooling always load.
//!
//! [`validate`]: BundlesData::validate

use crate::error::{PolicyError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lowest boundary marker; every valid boundary list starts here
pub const FIRST_BOUNDARY: &str = "0x00000000";

/// Highest boundary marker; every valid boundary list ends here
pub const LAST_BOUNDARY: &str = "0xffffffff";

/// Ordered hash-range boundaries defining a namespace's topic bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlesData {
    /// Boundary markers in ascending order
    #[serde(default)]
    pub boundaries: Vec<String>,
}

impl BundlesData {
    /// Wrap a raw boundary list as-is.
    ///
    /// No checking or repair happens here; call [`validate`] when the
    /// well-formedness guarantee is needed.
    ///
    /// [`validate`]: BundlesData::validate
    pub fn new(boundaries: Vec<String>) -> Self {
        Self { boundaries }
    }

    /// Build `num_bundles` evenly sized bundles over the full 32-bit space
    pub fn uniform(num_bundles: u32) -> Result<Self> {
        if num_bundles == 0 {
            return Err(PolicyError::InvalidBundles(
                "bundle count must be at least 1".to_string(),
            ));
        }
        let step = (1u64 << 32) / u64::from(num_bundles);
        let mut boundaries = Vec::with_capacity(num_bundles as usize + 1);
        for i in 0..u64::from(num_bundles) {
            boundaries.push(format!("0x{:08x}", i * step));
        }
        boundaries.push(LAST_BOUNDARY.to_string());
        let data = Self { boundaries };
        data.validate()?;
        debug!(num_bundles, "generated uniform bundle boundaries");
        Ok(data)
    }

    /// Number of bundles these boundaries define
    pub fn num_bundles(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Check that the boundary list partitions the whole 32-bit space.
    ///
    /// Fails when the list has fewer than two entries, any entry is not a
    /// `0x`-prefixed 32-bit hex value, the sequence is not strictly
    /// increasing, or the endpoints are not [`FIRST_BOUNDARY`] and
    /// [`LAST_BOUNDARY`].
    pub fn validate(&self) -> Result<()> {
        if self.boundaries.len() < 2 {
            return Err(PolicyError::InvalidBundles(format!(
                "expected at least 2 boundaries, got {}",
                self.boundaries.len()
            )));
        }
        let values = self
            .boundaries
            .iter()
            .map(|marker| parse_boundary(marker))
            .collect::<Result<Vec<u32>>>()?;
        if values[0] != 0 {
            return Err(PolicyError::InvalidBundles(format!(
                "first boundary must be {}, got {}",
                FIRST_BOUNDARY, self.boundaries[0]
            )));
        }
        if values[values.len() - 1] != u32::MAX {
            return Err(PolicyError::InvalidBundles(format!(
                "last boundary must be {}, got {}",
                LAST_BOUNDARY,
                self.boundaries[self.boundaries.len() - 1]
            )));
        }
        for pair in values.windows(2) {
            if pair[1] <= pair[0] {
                return Err(PolicyError::InvalidBundles(format!(
                    "boundaries must be strictly increasing: 0x{:08x} does not follow 0x{:08x}",
                    pair[1], pair[0]
                )));
            }
        }
        Ok(())
    }
}

/// Parse one `0x`-prefixed 32-bit hex boundary marker
fn parse_boundary(marker: &str) -> Result<u32> {
    let digits = marker.strip_prefix("0x").ok_or_else(|| {
        PolicyError::InvalidBundles(format!("boundary '{}' is missing the 0x prefix", marker))
    })?;
    u32::from_str_radix(digits, 16).map_err(|_| {
        PolicyError::InvalidBundles(format!("boundary '{}' is not a 32-bit hex value", marker))
    })
}

//! Column-count factorization.
//!
//! Equal-column layouts only make sense for track counts that divide the
//! column count evenly, so the first step of every generation run is to find
//! those divisors. `1` is dropped: a single full-width track is already what
//! every cell gets at mobile sizes, so there is no `--ec1` modifier.
//!
//! ```text
//! 12 → [2, 3, 4, 6, 12]
//!  9 → [3, 9]          (perfect square, 3 appears once)
//!  7 → [7]             (prime)
//!  1 → []              (no equal-column selectors at all)
//! ```

use serde::Serialize;
use std::ops::Deref;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FactorizeError {
    #[error("invalid argument: expected a positive column count, got {0:?}")]
    InvalidArgument(String),
}

/// Divisors of a column count, excluding 1, strictly ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorSet(Vec<u32>);

impl FactorSet {
    /// Factorize a column count by trial division up to its square root.
    ///
    /// Each divisor `i` found contributes its complement `columns / i` as well,
    /// except when the two coincide. Zero has no divisors and yields an empty set.
    pub fn of(columns: u32) -> Self {
        let mut factors = Vec::new();
        let mut i: u32 = 1;
        while u64::from(i) * u64::from(i) <= u64::from(columns) {
            if columns % i == 0 {
                let complement = columns / i;
                factors.push(i);
                if i != complement {
                    factors.push(complement);
                }
            }
            i += 1;
        }
        factors.sort_unstable();
        if !factors.is_empty() {
            factors.remove(0);
        }
        Self(factors)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for FactorSet {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

/// Parse a textual column count.
///
/// Column counts arrive as text from query strings and CLI flags. Anything
/// that isn't a positive integer (surrounding whitespace allowed) is rejected.
pub fn parse_columns(input: &str) -> Result<u32, FactorizeError> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FactorizeError::InvalidArgument(input.to_string())),
    }
}

/// Factorize a textual column count.
pub fn factorize(input: &str) -> Result<FactorSet, FactorizeError> {
    parse_columns(input).map(FactorSet::of)
}

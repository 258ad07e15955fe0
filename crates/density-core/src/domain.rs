//! Fixed plotting/binning domain

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[lo, hi]` with `lo < hi`, both finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    /// Domain matched to the default bimodal mixture (modes at -1 and 2)
    pub const DEFAULT: Domain = Domain { lo: -3.0, hi: 6.0 };

    /// Create a new domain, rejecting empty, inverted or non-finite bounds
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "domain bounds must be finite, got [{lo}, {hi}]"
            )));
        }
        if lo >= hi {
            return Err(Error::InvalidConfiguration(format!(
                "domain lower bound must be below upper bound, got [{lo}, {hi}]"
            )));
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width of the domain (`hi - lo`)
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Check if a value lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

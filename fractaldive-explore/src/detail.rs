//! Scoring how much visible structure a grayscale frame has.
//!
//! Every meter maps a buffer of grey values to a score in `[0, 1]`; higher
//! means more detail. The controller only compares scores from the same
//! meter, so the scales need not agree across meters.

use serde::{Deserialize, Serialize};

use crate::config::unit_interval;
use crate::error::ExploreError;

/// Scores a grayscale detail buffer.
pub trait DetailMeter {
    /// Score in `[0, 1]`. An empty buffer scores 0.
    fn measure(&self, buffer: &[u8]) -> f64;
}

fn histogram(buffer: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &v in buffer {
        counts[v as usize] += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Colour variety
// ---------------------------------------------------------------------------

/// Blend of how many distinct grey values appear and how much of the
/// frame lies outside the set.
///
/// `score = w · distinct / 255 + (1 − w) · (1 − zeros / n)`. Frames that are
/// mostly interior, or that show only a few iteration bands, score low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVariety {
    pub variety_weight: f64,
}

impl ColorVariety {
    pub const DEFAULT_VARIETY_WEIGHT: f64 = 0.5;
}

impl Default for ColorVariety {
    fn default() -> Self {
        Self {
            variety_weight: Self::DEFAULT_VARIETY_WEIGHT,
        }
    }
}

impl DetailMeter for ColorVariety {
    fn measure(&self, buffer: &[u8]) -> f64 {
        if buffer.is_empty() {
            return 0.0;
        }
        let counts = histogram(buffer);
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        let variety = distinct as f64 / 255.0;
        let coverage = 1.0 - counts[0] as f64 / buffer.len() as f64;
        let w = self.variety_weight;
        // 256 distinct values push the variety term just past 1.
        (w * variety + (1.0 - w) * coverage).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Shannon entropy of the grey-value distribution, normalized by its
/// maximum of 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entropy;

impl DetailMeter for Entropy {
    fn measure(&self, buffer: &[u8]) -> f64 {
        if buffer.is_empty() {
            return 0.0;
        }
        let n = buffer.len() as f64;
        let bits: f64 = histogram(buffer)
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum();
        bits / 8.0
    }
}

// ---------------------------------------------------------------------------
// Edge density
// ---------------------------------------------------------------------------

/// Fraction of pixels whose value differs from the previous pixel in
/// row-major order. The first pixel is compared against 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDensity;

impl DetailMeter for EdgeDensity {
    fn measure(&self, buffer: &[u8]) -> f64 {
        if buffer.is_empty() {
            return 0.0;
        }
        let mut last = 0u8;
        let mut changes = 0usize;
        for &v in buffer {
            if v != last {
                changes += 1;
            }
            last = v;
        }
        changes as f64 / buffer.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Configurable selection
// ---------------------------------------------------------------------------

/// A detail meter chosen at run time from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailMetric {
    ColorVariety {
        #[serde(default = "default_variety_weight")]
        variety_weight: f64,
    },
    Entropy,
    EdgeDensity,
}

fn default_variety_weight() -> f64 {
    ColorVariety::DEFAULT_VARIETY_WEIGHT
}

impl Default for DetailMetric {
    fn default() -> Self {
        Self::ColorVariety {
            variety_weight: default_variety_weight(),
        }
    }
}

impl DetailMetric {
    /// Checks the colour-variety weight lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ExploreError> {
        if let Self::ColorVariety { variety_weight } = *self {
            unit_interval("variety_weight", variety_weight)?;
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ColorVariety { .. } => "color_variety",
            Self::Entropy => "entropy",
            Self::EdgeDensity => "edge_density",
        }
    }
}

impl DetailMeter for DetailMetric {
    fn measure(&self, buffer: &[u8]) -> f64 {
        match *self {
            Self::ColorVariety { variety_weight } => {
                ColorVariety { variety_weight }.measure(buffer)
            }
            Self::Entropy => Entropy.measure(buffer),
            Self::EdgeDensity => EdgeDensity.measure(buffer),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

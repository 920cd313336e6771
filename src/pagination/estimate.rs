//! Block height estimation.
//!
//! Heights are heuristic: a fixed constant per block kind, and a
//! character-count wrap guess for free-text lines. The estimator is a trait
//! so a future implementation can substitute real text measurement without
//! touching the flow algorithm.

use crate::config::BlockMetrics;
use crate::models::{BlockKind, ContentBlock};

/// Estimates the vertical height of a content block, in layout units.
pub trait HeightEstimator {
    /// Returns the estimated height of the block.
    ///
    /// Implementations may return any number; the flow algorithm clamps
    /// negative and non-finite values to zero before budgeting.
    fn estimate(&self, block: &ContentBlock) -> f64;
}

/// Clamps a height estimate to a usable, non-negative value.
///
/// Negative and non-finite estimates become zero so the remaining page
/// budget can never go negative and the pass can never loop.
pub fn clamp_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}

/// The default estimator: fixed per-kind unit heights, with free-text lines
/// estimated as `ceil(chars / chars_per_line) * line_unit_height`.
#[derive(Debug, Clone)]
pub struct CharCountEstimator {
    metrics: BlockMetrics,
}

impl CharCountEstimator {
    /// Creates an estimator from the configured block metrics.
    pub fn new(metrics: BlockMetrics) -> Self {
        Self { metrics }
    }
}

impl HeightEstimator for CharCountEstimator {
    fn estimate(&self, block: &ContentBlock) -> f64 {
        let m = &self.metrics;
        match block.kind {
            // Header blocks are normally engine chrome charged at the
            // profile heights; a header in the input stream is treated
            // like a section title.
            BlockKind::Header | BlockKind::SectionTitle => m.section_title_height,
            BlockKind::SubsectionTitle => m.subsection_title_height,
            BlockKind::Line => {
                let chars = block.text.chars().count();
                let lines = chars.div_ceil(m.chars_per_line.max(1)).max(1);
                lines as f64 * m.line_unit_height
            }
            BlockKind::TableHead => m.table_head_height,
            BlockKind::TableRow => m.table_row_height,
            BlockKind::SignatureBlock => m.signature_block_height,
        }
    }
}

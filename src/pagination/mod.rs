//! Document pagination engine.
//!
//! Converts a structured document into fixed-height pages for A4 print
//! output. The engine is a single forward pass over an ordered block
//! sequence: blocks are never split, a table's head is reissued when its
//! rows resume on a continuation page, and a block taller than the whole
//! page budget is placed alone on its own page so progress is always made.
//! The whole pipeline is pure; identical input yields an identical page
//! partition every time.

mod compose;
mod estimate;
mod flow;

pub use compose::{compose_document, contract_blocks, quotation_blocks, report_blocks};
pub use estimate::{CharCountEstimator, HeightEstimator, clamp_height};
pub use flow::{DocumentChrome, paginate};

use crate::config::LayoutSettings;
use crate::models::{Document, Page};

/// Paginates a document with the configured layout settings.
///
/// Convenience wrapper tying [`compose_document`], the default
/// [`CharCountEstimator`], and [`paginate`] together.
///
/// # Example
///
/// ```
/// use portal_engine::config::LayoutSettings;
/// use portal_engine::models::{Document, ReportSection, WeeklyReport};
/// use portal_engine::pagination::paginate_document;
///
/// let report = Document::WeeklyReport(WeeklyReport {
///     week_label: "Week 35, 2026".to_string(),
///     prepared_by: "Lê Minh".to_string(),
///     sections: vec![ReportSection {
///         title: "Shipments".to_string(),
///         entries: vec!["BL SGN240815 delivered".to_string()],
///     }],
/// });
///
/// let pages = paginate_document(&report, &LayoutSettings::default());
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].number, 1);
/// ```
pub fn paginate_document(document: &Document, layout: &LayoutSettings) -> Vec<Page> {
    let (chrome, blocks) = compose_document(document);
    let profile = layout.profile(document.document_type());
    let estimator = CharCountEstimator::new(layout.metrics.clone());
    paginate(&chrome, &blocks, profile, &estimator)
}

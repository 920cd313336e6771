//! Configuration types for the portal engines.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML configuration files. Defaults mirror the
//! constants the portal shipped with, so the engines are usable without a
//! configuration directory.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::models::DocumentType;

/// Height budget and header heights for one document type.
///
/// All values are layout units, an approximate pixel scale calibrated to a
/// printable A4 page height.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageProfile {
    /// Maximum cumulative block height per page.
    pub budget: f64,
    /// Height of the full header on page 1.
    pub first_header_height: f64,
    /// Height of the abbreviated header on continuation pages.
    pub continuation_header_height: f64,
}

/// Per-kind unit heights used by the default height estimator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockMetrics {
    /// Height of a section title.
    pub section_title_height: f64,
    /// Height of a subsection title.
    pub subsection_title_height: f64,
    /// Height of one wrapped text line.
    pub line_unit_height: f64,
    /// Characters assumed to fit on one wrapped line.
    pub chars_per_line: usize,
    /// Height of a table column-header row.
    pub table_head_height: f64,
    /// Height of a table body row.
    pub table_row_height: f64,
    /// Height of the trailing signature area.
    pub signature_block_height: f64,
}

impl Default for BlockMetrics {
    fn default() -> Self {
        Self {
            section_title_height: 34.0,
            subsection_title_height: 26.0,
            line_unit_height: 18.0,
            chars_per_line: 80,
            table_head_height: 28.0,
            table_row_height: 24.0,
            signature_block_height: 160.0,
        }
    }
}

/// Layout settings: one page profile per document type plus block metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutSettings {
    /// Profile for contracts.
    pub contract: PageProfile,
    /// Profile for quotations.
    pub quotation: PageProfile,
    /// Profile for weekly reports.
    pub weekly_report: PageProfile,
    /// Per-kind unit heights.
    #[serde(default)]
    pub metrics: BlockMetrics,
}

impl LayoutSettings {
    /// Returns the page profile for a document type.
    pub fn profile(&self, document_type: DocumentType) -> &PageProfile {
        match document_type {
            DocumentType::Contract => &self.contract,
            DocumentType::Quotation => &self.quotation,
            DocumentType::WeeklyReport => &self.weekly_report,
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            contract: PageProfile {
                budget: 1100.0,
                first_header_height: 140.0,
                continuation_header_height: 48.0,
            },
            quotation: PageProfile {
                budget: 960.0,
                first_header_height: 120.0,
                continuation_header_height: 44.0,
            },
            weekly_report: PageProfile {
                budget: 950.0,
                first_header_height: 110.0,
                continuation_header_height: 40.0,
            },
            metrics: BlockMetrics::default(),
        }
    }
}

/// Attendance settings: per-role start times and the exemption list.
///
/// Passed explicitly into [`crate::attendance::classify_day`]; re-running a
/// classification with changed start times retroactively changes the derived
/// Present/Late label of records that carry a check-in time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttendanceSettings {
    /// Configured start time per role key, as "HH:MM".
    #[serde(default)]
    pub start_times: HashMap<String, String>,
    /// Users excluded from mandatory daily check-in tracking.
    #[serde(default)]
    pub exempt_user_ids: HashSet<String>,
}

impl AttendanceSettings {
    /// Returns the configured start time for a role, if any.
    ///
    /// Callers fall back to
    /// [`crate::attendance::DEFAULT_START_TIME`] when this is `None`.
    pub fn start_time_for(&self, role: &str) -> Option<&str> {
        self.start_times.get(role).map(String::as_str)
    }

    /// Returns true if the user is exempt from daily check-in tracking.
    pub fn is_exempt(&self, user_id: &str) -> bool {
        self.exempt_user_ids.contains(user_id)
    }
}

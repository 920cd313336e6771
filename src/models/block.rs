//! Content blocks and pages, the pagination vocabulary.
//!
//! A document is flattened into an ordered sequence of content blocks; the
//! paginator partitions them into pages without ever splitting a block.
//! Placed blocks are origin-tagged so that engine-inserted chrome (page
//! headers, repeated table heads) can be told apart from source content.

use serde::{Deserialize, Serialize};

/// The kind of a content block, which determines its height heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Full document header (page 1) or abbreviated continuation header.
    Header,
    /// Numbered article or section title.
    SectionTitle,
    /// Sub-clause or sub-section title.
    SubsectionTitle,
    /// A wrapped line of free text.
    Line,
    /// Column header row of a table, reissued on continuation pages.
    TableHead,
    /// A single table row; never split across pages.
    TableRow,
    /// Trailing signature area.
    SignatureBlock,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Header => write!(f, "Header"),
            BlockKind::SectionTitle => write!(f, "SectionTitle"),
            BlockKind::SubsectionTitle => write!(f, "SubsectionTitle"),
            BlockKind::Line => write!(f, "Line"),
            BlockKind::TableHead => write!(f, "TableHead"),
            BlockKind::TableRow => write!(f, "TableRow"),
            BlockKind::SignatureBlock => write!(f, "SignatureBlock"),
        }
    }
}

/// One immutable unit of renderable content.
///
/// Blocks are produced in document order and never mutated afterwards.
/// Table rows and heads carry the id of the table they belong to, so the
/// paginator knows which head to reissue when a table resumes on a
/// continuation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// The kind of the block.
    pub kind: BlockKind,
    /// The rendered text payload (cells joined for table rows).
    pub text: String,
    /// Table membership, for `TableHead` and `TableRow` blocks.
    #[serde(default)]
    pub table: Option<String>,
}

impl ContentBlock {
    /// Creates a block with no table membership.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            table: None,
        }
    }

    /// Creates a block belonging to the named table.
    pub fn in_table(kind: BlockKind, text: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            table: Some(table.into()),
        }
    }
}

/// Why a block appears on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOrigin {
    /// A block from the input sequence.
    Source,
    /// The full or continuation page header inserted by the paginator.
    PageHeader,
    /// A table head repeated at the top of a continuation page.
    TableHeadRepeat,
}

/// A block placed on a page, with its estimated height and origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    /// The placed content.
    pub block: ContentBlock,
    /// The height charged against the page budget, in layout units.
    pub height: f64,
    /// Whether the block came from the input or was inserted by the engine.
    pub origin: BlockOrigin,
}

/// One fixed-height output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-indexed page number.
    pub number: usize,
    /// Blocks in render order, chrome included.
    pub blocks: Vec<PlacedBlock>,
}

impl Page {
    /// Iterates the source blocks of the page, skipping engine chrome.
    ///
    /// Concatenating `source_blocks` across all pages of a layout
    /// reproduces the paginated input exactly.
    pub fn source_blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.blocks
            .iter()
            .filter(|p| p.origin == BlockOrigin::Source)
            .map(|p| &p.block)
    }

    /// Sum of the heights of every placed block, chrome included.
    pub fn total_height(&self) -> f64 {
        self.blocks.iter().map(|p| p.height).sum()
    }
}

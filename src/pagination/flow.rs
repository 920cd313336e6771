//! The page-flow algorithm.
//!
//! A single forward pass over the block sequence, maintaining the current
//! page's cumulative height. When the next block would exceed the page
//! budget the current page is flushed, a continuation header opens the new
//! page, and, if the pending block is a table row, the table's head is
//! reissued first so every page with table rows is independently readable.

use std::collections::HashMap;

use crate::config::PageProfile;
use crate::models::{BlockKind, BlockOrigin, ContentBlock, Page, PlacedBlock};

use super::estimate::{HeightEstimator, clamp_height};

/// The header pair for one document: full on page 1, abbreviated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChrome {
    /// Full document header, placed on page 1.
    pub header: ContentBlock,
    /// Abbreviated continuation header, placed on every later page.
    pub continuation: ContentBlock,
}

/// Partitions a block sequence into fixed-height pages.
///
/// # Guarantees
///
/// - No block is ever split between two pages.
/// - Concatenating the source blocks of all pages, in order, reproduces
///   `blocks` exactly: nothing dropped, duplicated, or reordered (chrome
///   and reissued table heads are origin-tagged, not source blocks).
/// - A block taller than the whole budget is placed alone on its own page;
///   the pass never stalls.
/// - Deterministic: identical input and constants yield an identical
///   partition.
///
/// # Edge cases
///
/// Empty input yields exactly one page containing only the header. A
/// trailing block (typically the signature area) that would overflow
/// triggers a page break even when most of the current page is empty.
pub fn paginate(
    chrome: &DocumentChrome,
    blocks: &[ContentBlock],
    profile: &PageProfile,
    estimator: &dyn HeightEstimator,
) -> Vec<Page> {
    let first_header_height = clamp_height(profile.first_header_height);
    let continuation_height = clamp_height(profile.continuation_header_height);
    let budget = clamp_height(profile.budget);

    let mut pages: Vec<Page> = Vec::new();
    let mut current = vec![PlacedBlock {
        block: chrome.header.clone(),
        height: first_header_height,
        origin: BlockOrigin::PageHeader,
    }];
    let mut current_height = first_header_height;
    let mut has_source = false;

    // Most recent head block seen per table id, for reissue on breaks.
    let mut table_heads: HashMap<String, ContentBlock> = HashMap::new();

    for block in blocks {
        if block.kind == BlockKind::TableHead {
            if let Some(table) = &block.table {
                table_heads.insert(table.clone(), block.clone());
            }
        }

        let height = clamp_height(estimator.estimate(block));

        if has_source && current_height + height > budget {
            pages.push(Page {
                number: pages.len() + 1,
                blocks: std::mem::take(&mut current),
            });

            current.push(PlacedBlock {
                block: chrome.continuation.clone(),
                height: continuation_height,
                origin: BlockOrigin::PageHeader,
            });
            current_height = continuation_height;
            has_source = false;

            if block.kind == BlockKind::TableRow {
                if let Some(head) = block.table.as_ref().and_then(|t| table_heads.get(t)) {
                    let head_height = clamp_height(estimator.estimate(head));
                    current.push(PlacedBlock {
                        block: head.clone(),
                        height: head_height,
                        origin: BlockOrigin::TableHeadRepeat,
                    });
                    current_height += head_height;
                }
            }
        }

        current.push(PlacedBlock {
            block: block.clone(),
            height,
            origin: BlockOrigin::Source,
        });
        current_height += height;
        has_source = true;
    }

    pages.push(Page {
        number: pages.len() + 1,
        blocks: current,
    });
    pages
}

//! Property tests for the pagination engine.
//!
//! Checks the structural guarantees over arbitrary block sequences and
//! page profiles: source completeness, the page budget, and determinism.

use proptest::prelude::*;

use portal_engine::config::{BlockMetrics, PageProfile};
use portal_engine::models::{BlockKind, BlockOrigin, ContentBlock, Page};
use portal_engine::pagination::{CharCountEstimator, DocumentChrome, paginate};

fn chrome() -> DocumentChrome {
    DocumentChrome {
        header: ContentBlock::new(BlockKind::Header, "CONTRACT No. CTR-2026-051"),
        continuation: ContentBlock::new(BlockKind::Header, "CTR-2026-051 (continued)"),
    }
}

fn estimator() -> CharCountEstimator {
    CharCountEstimator::new(BlockMetrics::default())
}

fn collect_source(pages: &[Page]) -> Vec<ContentBlock> {
    pages
        .iter()
        .flat_map(|p| p.source_blocks().cloned())
        .collect()
}

fn arb_block() -> impl Strategy<Value = ContentBlock> {
    prop_oneof![
        "[a-z ]{0,300}".prop_map(|text| ContentBlock::new(BlockKind::Line, text)),
        "[a-z ]{1,60}".prop_map(|text| ContentBlock::new(BlockKind::SectionTitle, text)),
        "[a-z ]{1,40}".prop_map(|text| ContentBlock::new(BlockKind::SubsectionTitle, text)),
        "[a-z |]{1,60}".prop_map(|text| ContentBlock::in_table(BlockKind::TableRow, text, "items")),
        Just(ContentBlock::in_table(
            BlockKind::TableHead,
            "No | Description | Qty | Unit price | Amount",
            "items"
        )),
        Just(ContentBlock::new(BlockKind::SignatureBlock, "signatures")),
    ]
}

fn arb_profile() -> impl Strategy<Value = PageProfile> {
    (200.0..1500.0f64, 20.0..200.0f64, 10.0..80.0f64).prop_map(
        |(budget, first_header_height, continuation_header_height)| PageProfile {
            budget,
            first_header_height,
            continuation_header_height,
        },
    )
}

proptest! {
    #[test]
    fn prop_source_blocks_reproduce_input(
        blocks in prop::collection::vec(arb_block(), 0..80),
        profile in arb_profile(),
    ) {
        let pages = paginate(&chrome(), &blocks, &profile, &estimator());
        prop_assert_eq!(collect_source(&pages), blocks);
    }

    #[test]
    fn prop_page_numbers_sequential(
        blocks in prop::collection::vec(arb_block(), 0..80),
        profile in arb_profile(),
    ) {
        let pages = paginate(&chrome(), &blocks, &profile, &estimator());
        prop_assert!(!pages.is_empty());
        for (i, page) in pages.iter().enumerate() {
            prop_assert_eq!(page.number, i + 1);
        }
    }

    #[test]
    fn prop_budget_exceeded_only_by_lone_oversized_block(
        blocks in prop::collection::vec(arb_block(), 0..80),
        profile in arb_profile(),
    ) {
        let pages = paginate(&chrome(), &blocks, &profile, &estimator());
        for page in &pages {
            if page.total_height() > profile.budget {
                // Only a single source block may be responsible.
                let source_count = page
                    .blocks
                    .iter()
                    .filter(|b| b.origin == BlockOrigin::Source)
                    .count();
                prop_assert_eq!(
                    source_count, 1,
                    "over-budget page {} has {} source blocks",
                    page.number, source_count
                );
            }
        }
    }

    #[test]
    fn prop_partition_is_deterministic(
        blocks in prop::collection::vec(arb_block(), 0..60),
        profile in arb_profile(),
    ) {
        let first = paginate(&chrome(), &blocks, &profile, &estimator());
        let second = paginate(&chrome(), &blocks, &profile, &estimator());
        prop_assert_eq!(first, second);
    }
}

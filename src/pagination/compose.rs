//! Flattening document models into block sequences.
//!
//! Each composer turns one source document into its header chrome plus an
//! ordered block sequence, in the order the printed document reads.

use rust_decimal::Decimal;

use crate::models::{
    BlockKind, ContentBlock, Contract, Document, Quotation, WeeklyReport,
};

use super::flow::DocumentChrome;

/// Table id used for quotation line items.
const ITEMS_TABLE: &str = "items";

/// Composes any document into chrome plus blocks.
pub fn compose_document(document: &Document) -> (DocumentChrome, Vec<ContentBlock>) {
    match document {
        Document::Contract(contract) => contract_blocks(contract),
        Document::Quotation(quotation) => quotation_blocks(quotation),
        Document::WeeklyReport(report) => report_blocks(report),
    }
}

/// Flattens a contract: articles with clause paragraphs, then the
/// signature area.
pub fn contract_blocks(contract: &Contract) -> (DocumentChrome, Vec<ContentBlock>) {
    let chrome = DocumentChrome {
        header: ContentBlock::new(
            BlockKind::Header,
            format!("CONTRACT No. {} - {}", contract.number, contract.partner),
        ),
        continuation: ContentBlock::new(
            BlockKind::Header,
            format!("Contract No. {} (continued)", contract.number),
        ),
    };

    let mut blocks = Vec::new();
    for article in &contract.articles {
        blocks.push(ContentBlock::new(BlockKind::SectionTitle, &article.title));
        for clause in &article.clauses {
            blocks.push(ContentBlock::new(BlockKind::Line, clause));
        }
    }
    blocks.push(ContentBlock::new(
        BlockKind::SignatureBlock,
        format!("Signed {} - {}", contract.signed_date, contract.partner),
    ));

    (chrome, blocks)
}

/// Flattens a quotation: the item table with computed amount column, the
/// total row, then the signature area.
pub fn quotation_blocks(quotation: &Quotation) -> (DocumentChrome, Vec<ContentBlock>) {
    let chrome = DocumentChrome {
        header: ContentBlock::new(
            BlockKind::Header,
            format!("QUOTATION {} - {}", quotation.number, quotation.customer),
        ),
        continuation: ContentBlock::new(
            BlockKind::Header,
            format!("Quotation {} (continued)", quotation.number),
        ),
    };

    let mut blocks = vec![ContentBlock::in_table(
        BlockKind::TableHead,
        "No | Description | Qty | Unit price | Amount",
        ITEMS_TABLE,
    )];

    for (index, item) in quotation.items.iter().enumerate() {
        let amount = item.amount(quotation.roe).round_dp(2);
        blocks.push(ContentBlock::in_table(
            BlockKind::TableRow,
            format!(
                "{} | {} | {} | {} | {}",
                index + 1,
                item.description,
                item.quantity,
                item.unit_price,
                amount
            ),
            ITEMS_TABLE,
        ));
    }

    let total: Decimal = quotation.total().round_dp(2);
    blocks.push(ContentBlock::in_table(
        BlockKind::TableRow,
        format!("Total | | | | {total}"),
        ITEMS_TABLE,
    ));
    blocks.push(ContentBlock::new(
        BlockKind::SignatureBlock,
        format!("For and on behalf of {}", quotation.customer),
    ));

    (chrome, blocks)
}

/// Flattens a weekly report: titled sections with free-text entries, then
/// the preparer's signature area.
pub fn report_blocks(report: &WeeklyReport) -> (DocumentChrome, Vec<ContentBlock>) {
    let chrome = DocumentChrome {
        header: ContentBlock::new(
            BlockKind::Header,
            format!("WEEKLY REPORT - {}", report.week_label),
        ),
        continuation: ContentBlock::new(
            BlockKind::Header,
            format!("{} (continued)", report.week_label),
        ),
    };

    let mut blocks = Vec::new();
    for section in &report.sections {
        blocks.push(ContentBlock::new(BlockKind::SectionTitle, &section.title));
        for entry in &section.entries {
            blocks.push(ContentBlock::new(BlockKind::Line, entry));
        }
    }
    blocks.push(ContentBlock::new(
        BlockKind::SignatureBlock,
        format!("Prepared by {}", report.prepared_by),
    ));

    (chrome, blocks)
}

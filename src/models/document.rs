//! Source document models for print layout.
//!
//! These are the three business documents the portal renders as paged A4
//! output: contracts, quotations, and weekly reports. Each carries only the
//! structured content; flattening into content blocks happens in
//! [`crate::pagination::compose`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The document types the paginator knows a page budget for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Service or freight contract.
    Contract,
    /// Price quotation with line items.
    Quotation,
    /// Weekly operations report.
    WeeklyReport,
}

/// A numbered article of a contract, with its clause paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title (e.g., "Article 3: Payment terms").
    pub title: String,
    /// Clause paragraphs in order.
    pub clauses: Vec<String>,
}

/// A freight/service contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract number shown in the header.
    pub number: String,
    /// The counterparty name.
    pub partner: String,
    /// Signing date shown next to the signature block.
    pub signed_date: NaiveDate,
    /// Articles in order.
    pub articles: Vec<Article>,
}

/// A single quotation line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationItem {
    /// Service description (e.g., "Ocean freight HCM - Singapore").
    pub description: String,
    /// Quantity of units.
    pub quantity: Decimal,
    /// Price per unit in the quoted currency.
    pub unit_price: Decimal,
}

impl QuotationItem {
    /// Line amount in local currency: quantity × unit price × ROE.
    pub fn amount(&self, roe: Decimal) -> Decimal {
        self.quantity * self.unit_price * roe
    }
}

/// A price quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    /// Quotation number shown in the header.
    pub number: String,
    /// Customer name.
    pub customer: String,
    /// Rate of exchange applied to foreign-currency line items.
    pub roe: Decimal,
    /// Line items in order.
    pub items: Vec<QuotationItem>,
}

impl Quotation {
    /// Total of all line amounts in local currency.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.amount(self.roe)).sum()
    }
}

/// One titled section of a weekly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section title.
    pub title: String,
    /// Free-text entries under the section.
    pub entries: Vec<String>,
}

/// A weekly operations report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Human-readable week label (e.g., "Week 35, 2026").
    pub week_label: String,
    /// Name of the employee who prepared the report.
    pub prepared_by: String,
    /// Report sections in order.
    pub sections: Vec<ReportSection>,
}

/// Any of the three paginatable documents, for API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Document {
    /// A contract.
    Contract(Contract),
    /// A quotation.
    Quotation(Quotation),
    /// A weekly report.
    WeeklyReport(WeeklyReport),
}

impl Document {
    /// The document type, for page-profile lookup.
    pub fn document_type(&self) -> DocumentType {
        match self {
            Document::Contract(_) => DocumentType::Contract,
            Document::Quotation(_) => DocumentType::Quotation,
            Document::WeeklyReport(_) => DocumentType::WeeklyReport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_quotation_item_amount_applies_roe() {
        let item = QuotationItem {
            description: "Ocean freight HCM - Singapore".to_string(),
            quantity: dec("2"),
            unit_price: dec("150.00"),
        };
        // 2 * 150.00 USD at 25,000 VND/USD
        assert_eq!(item.amount(dec("25000")), dec("7500000.00"));
    }

    #[test]
    fn test_quotation_total_sums_items() {
        let quotation = Quotation {
            number: "QUO-2026-014".to_string(),
            customer: "Mekong Foods JSC".to_string(),
            roe: dec("1"),
            items: vec![
                QuotationItem {
                    description: "Trucking".to_string(),
                    quantity: dec("1"),
                    unit_price: dec("1200000"),
                },
                QuotationItem {
                    description: "Customs clearance".to_string(),
                    quantity: dec("3"),
                    unit_price: dec("450000"),
                },
            ],
        };
        assert_eq!(quotation.total(), dec("2550000"));
    }

    #[test]
    fn test_document_type_lookup() {
        let report = Document::WeeklyReport(WeeklyReport {
            week_label: "Week 35, 2026".to_string(),
            prepared_by: "Lê Minh".to_string(),
            sections: vec![],
        });
        assert_eq!(report.document_type(), DocumentType::WeeklyReport);
    }

    #[test]
    fn test_document_tagged_serialization() {
        let doc = Document::Quotation(Quotation {
            number: "QUO-2026-014".to_string(),
            customer: "Mekong Foods JSC".to_string(),
            roe: dec("25000"),
            items: vec![],
        });

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"type\":\"quotation\""));

        let deserialized: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, doc);
    }

    #[test]
    fn test_contract_round_trip() {
        let contract = Contract {
            number: "CTR-2026-051".to_string(),
            partner: "Saigon Port Logistics".to_string(),
            signed_date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            articles: vec![Article {
                title: "Article 1: Scope of services".to_string(),
                clauses: vec!["The carrier agrees to transport the goods.".to_string()],
            }],
        };

        let json = serde_json::to_string(&contract).unwrap();
        let deserialized: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, contract);
    }
}

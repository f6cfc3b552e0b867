//! # Input Records
//!
//! The record shapes the engine consumes. Monetary amounts are integers
//! in the smallest currency unit — never floating point. Negative and
//! overflowing amounts are a caller responsibility; the engine assumes
//! pre-validated inputs.

use serde::{Deserialize, Serialize};

/// An enterprise profile as supplied by the persistence layer.
///
/// `scale_name` is matched against the taxonomy's scale rules by exact
/// name. An unknown scale is not an error — it simply has no applicable
/// rule coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseProfile {
    /// Registered enterprise name (used for brand-collision matching).
    pub name: String,
    /// Enterprise size category, e.g. "Small", "Medium", "Large".
    pub scale_name: String,
    /// Free-text labels of the compliance documents on file.
    #[serde(default)]
    pub compliance_docs: Vec<String>,
}

/// Direction of a bank transaction.
///
/// A closed two-variant set, applied uniformly across every component:
/// only deposits count toward the reconciliation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money entering the account.
    Deposit,
    /// Money leaving the account (excluded from deposit sums).
    Withdrawal,
}

/// A single bank transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Transaction direction.
    pub kind: TransactionKind,
}

impl BankTransaction {
    /// Whether this transaction counts toward the deposit total.
    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionKind::Deposit
    }
}

/// A tax invoice issued by the enterprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInvoice {
    /// Invoice total in the same smallest currency unit as transactions.
    pub total_amount: u64,
}

/// A trademark registration from the external registry feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trademark {
    /// Registered mark name.
    pub name: String,
    /// Registrant.
    pub owner_name: String,
    /// Link to the registry page, when the scraper captured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// An official gazette announcement from the scraping subsystem.
///
/// Not evaluated by any current rule; carried here so callers and the
/// engine share one definition of the registry-feed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteAnnouncement {
    /// Announcement headline.
    pub title: String,
    /// Publication date as printed in the gazette (not normalized).
    pub date: String,
    /// Link to the announcement page.
    pub source_url: String,
    /// Scraper-computed digest used for change detection upstream.
    pub content_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_kind_serde_uses_snake_case() {
        let json = serde_json::to_string(&TransactionKind::Deposit).unwrap();
        assert_eq!(json, "\"deposit\"");
        let kind: TransactionKind = serde_json::from_str("\"withdrawal\"").unwrap();
        assert_eq!(kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn is_deposit_classification() {
        let deposit = BankTransaction {
            amount: 100,
            kind: TransactionKind::Deposit,
        };
        let withdrawal = BankTransaction {
            amount: 100,
            kind: TransactionKind::Withdrawal,
        };
        assert!(deposit.is_deposit());
        assert!(!withdrawal.is_deposit());
    }

    #[test]
    fn profile_compliance_docs_default_to_empty() {
        let profile: EnterpriseProfile =
            serde_json::from_str(r#"{"name": "Acme", "scale_name": "Medium"}"#).unwrap();
        assert!(profile.compliance_docs.is_empty());
    }

    #[test]
    fn trademark_source_url_optional() {
        let tm: Trademark =
            serde_json::from_str(r#"{"name": "Acme Goods", "owner_name": "Acme Ltd"}"#).unwrap();
        assert_eq!(tm.source_url, None);
        let json = serde_json::to_string(&tm).unwrap();
        assert!(!json.contains("source_url"));
    }

    #[test]
    fn gazette_announcement_serde_roundtrip() {
        let ann = GazetteAnnouncement {
            title: "Change of registered address".into(),
            date: "1402/07/12".into(),
            source_url: "https://gazette.example/123".into(),
            content_hash: "b2c3d4".into(),
        };
        let json = serde_json::to_string(&ann).unwrap();
        let deser: GazetteAnnouncement = serde_json::from_str(&json).unwrap();
        assert_eq!(ann, deser);
    }
}

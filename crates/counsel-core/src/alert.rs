//! # Alert Value Objects
//!
//! An [`Alert`] is the engine's unit of actionable output: a fresh value
//! built from the immutable taxonomy template plus rule-specific
//! overrides. Alerts have no identity beyond their content and are never
//! persisted by the engine.
//!
//! ## Template fields
//!
//! The taxonomy's alert template may carry fields this crate does not
//! model (locale tags, schema versions, UI hints). Those survive into
//! every emitted alert through the flattened [`Alert::extra`] map, so a
//! template field is only ever lost when a rule explicitly overwrites it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A structured link attached to an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToActionButton {
    /// Button label.
    pub text: String,
    /// Link kind, e.g. "external_link".
    #[serde(rename = "type")]
    pub kind: String,
    /// Link target URL (or a placeholder when none is known).
    pub target: String,
}

/// Structured numeric breakdown attached to a reconciliation alert.
///
/// All values are integers in the same smallest currency unit as the
/// input records — no precision is lost between input and alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationDetails {
    /// Sum of all deposit transactions.
    pub total_deposits: u64,
    /// Sum of all issued invoice totals.
    pub total_invoiced: u64,
    /// Deposits in excess of the invoiced total.
    pub unaccounted_amount: u64,
    /// The tolerance that was applied, in whole percent.
    pub tolerance_percentage: u32,
}

/// An actionable alert produced by rule evaluation.
///
/// Constructed by cloning the taxonomy's alert prototype and overwriting
/// rule-specific fields; the shared template is never mutated. The
/// `alert_id` is a stable code identifying the rule that fired
/// (e.g. "CHK-002", "FIN-002", "WTC-001").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    /// Stable code of the rule that fired.
    pub alert_id: String,
    /// Alert category, e.g. "Financial", "Regulatory Compliance".
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Short headline.
    pub title: String,
    /// Human-readable, locale-specific explanation.
    pub summary: String,
    /// Component that produced the alert.
    pub source: String,
    /// Priority label, e.g. "High".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Crisis severity label, e.g. "critical".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_level: Option<String>,
    /// What the enterprise should do about it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    /// Numeric breakdown for financial alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ReconciliationDetails>,
    /// Statute or regulation backing the alert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
    /// Illustrative cost of inaction, in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_impact_usd: Option<u64>,
    /// Structured follow-up link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action_button: Option<CallToActionButton>,
    /// Template fields not modeled above, carried through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

//! # Compliance Checker
//!
//! Evaluates an enterprise profile against the scale-specific
//! required-document rules in the taxonomy. Emits at most one `CHK-002`
//! alert; a compliant profile and a profile with no applicable rule are
//! indistinguishable to the caller, and that is intentional — only
//! actionable non-compliance is reported.

use counsel_core::{Alert, EnterpriseProfile};

use crate::RuleEngine;

/// Stable code for the scale-compliance rule.
const ALERT_ID: &str = "CHK-002";
const ALERT_TYPE: &str = "Regulatory Compliance";
const SOURCE: &str = "Counsel Logic Engine";

impl RuleEngine {
    /// Check a profile against its scale's required-document rule.
    ///
    /// Looks up the scale rule by exact name; a scale the taxonomy does
    /// not cover produces no alert. The rule's required markers are
    /// case-sensitive substrings — any document on file containing a
    /// marker satisfies that marker. The first marker missing from every
    /// document yields the alert.
    pub fn check_scale_compliance(&self, profile: &EnterpriseProfile) -> Option<Alert> {
        let rule = match self.taxonomy().scale_rule(&profile.scale_name) {
            Some(rule) => rule,
            None => {
                tracing::debug!(
                    scale = %profile.scale_name,
                    "no rule for scale, skipping compliance check"
                );
                return None;
            }
        };

        let missing = rule.required_compliance.iter().find(|marker| {
            !profile
                .compliance_docs
                .iter()
                .any(|doc| doc.contains(marker.as_str()))
        })?;

        tracing::debug!(
            scale = %profile.scale_name,
            marker = %missing,
            "required compliance document missing"
        );

        let mut alert = self.taxonomy().alert_template().instantiate();
        alert.alert_id = ALERT_ID.into();
        alert.alert_type = ALERT_TYPE.into();
        alert.priority = Some("High".into());
        alert.title = format!("{} scale requirements not met", profile.scale_name);
        alert.summary = format!(
            "Enterprises at the {} scale are required to hold a '{}' certificate. \
             It was not found in your documents.",
            profile.scale_name, missing
        );
        alert.call_to_action = Some("Please upload the required compliance certificate.".into());
        alert.source = SOURCE.into();
        Some(alert)
    }
}

//! # Brand-Collision Detector
//!
//! Fuzzy-matches a client's brand name against newly registered
//! trademarks from the registry feed. Every trademark at or above the
//! similarity threshold yields one `WTC-001` alert, in input order.

use counsel_core::{Alert, CallToActionButton, Trademark};

use crate::similarity::token_set_ratio;
use crate::RuleEngine;

/// Inclusive token-set similarity threshold, in `[0, 100]`.
pub const DEFAULT_SIMILARITY_THRESHOLD: u32 = 80;

/// Stable code for the trademark-collision rule.
const ALERT_ID: &str = "WTC-001";
const SOURCE: &str = "Counsel Brand Watchdog";
const LEGAL_REFERENCE: &str =
    "Patents, Industrial Designs and Trademarks Registration Act";
/// Illustrative cost of a trademark dispute, used as the alert's
/// potential financial impact.
const ESTIMATED_IMPACT_USD: u64 = 50_000;
/// Button target when the scraper captured no registry link.
const MISSING_SOURCE_PLACEHOLDER: &str = "#";

impl RuleEngine {
    /// Check a brand against trademarks with the default threshold (80).
    pub fn check_brand_similarity(
        &self,
        client_brand_name: &str,
        trademarks: &[Trademark],
    ) -> Vec<Alert> {
        self.check_brand_similarity_with_threshold(
            client_brand_name,
            trademarks,
            DEFAULT_SIMILARITY_THRESHOLD,
        )
    }

    /// Check a brand against trademarks with an explicit threshold.
    ///
    /// The threshold is inclusive: a similarity equal to it triggers an
    /// alert. Each matching trademark yields exactly one alert; an empty
    /// trademark list yields an empty sequence.
    pub fn check_brand_similarity_with_threshold(
        &self,
        client_brand_name: &str,
        trademarks: &[Trademark],
        similarity_threshold: u32,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for trademark in trademarks {
            let similarity = token_set_ratio(client_brand_name, &trademark.name);
            if similarity < similarity_threshold {
                tracing::debug!(
                    trademark = %trademark.name,
                    similarity,
                    similarity_threshold,
                    "trademark below threshold, no alert"
                );
                continue;
            }

            let mut alert = self.taxonomy().alert_template().instantiate();
            alert.alert_id = ALERT_ID.into();
            alert.crisis_level = Some("critical".into());
            alert.title = "Trademark similarity warning".into();
            alert.summary = format!(
                "A new trademark \"{}\" was registered by \"{}\" with a high \
                 similarity ({}%) to your brand \"{}\".",
                trademark.name, trademark.owner_name, similarity, client_brand_name
            );
            alert.legal_reference = Some(LEGAL_REFERENCE.into());
            alert.financial_impact_usd = Some(ESTIMATED_IMPACT_USD);
            alert.call_to_action_button = Some(CallToActionButton {
                text: "Review and pursue legal action".into(),
                kind: "external_link".into(),
                target: trademark
                    .source_url
                    .clone()
                    .unwrap_or_else(|| MISSING_SOURCE_PLACEHOLDER.into()),
            });
            alert.source = SOURCE.into();
            alerts.push(alert);
        }
        alerts
    }
}

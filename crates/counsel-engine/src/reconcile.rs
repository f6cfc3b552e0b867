//! # Reconciliation Engine
//!
//! Sums bank deposits against invoiced totals and emits one `FIN-002`
//! alert when deposits exceed invoices beyond the tolerance. The check is
//! asymmetric: over-invoicing and matched books never alert — only
//! unexplained excess cash does.
//!
//! All arithmetic is integer-exact. The trigger condition
//! `deposits > invoiced * (1 + tolerance/100)` is evaluated as
//! `deposits * 100 > invoiced * (100 + tolerance)` in `i128`, so no
//! floating point ever touches a monetary value.

use counsel_core::{
    format_thousands, Alert, BankTransaction, ReconciliationDetails, TaxInvoice,
};

use crate::RuleEngine;

/// Allowed excess of deposits over invoices, in whole percent.
pub const DEFAULT_TOLERANCE_PERCENTAGE: u32 = 5;

/// Stable code for the deposit/invoice mismatch rule.
const ALERT_ID: &str = "FIN-002";
const ALERT_TYPE: &str = "Financial";
const SOURCE: &str = "Counsel Reconciliation Engine";

impl RuleEngine {
    /// Reconcile with the default 5% tolerance.
    ///
    /// Returns zero or one alert; a sequence keeps the interface uniform
    /// with the other alert producers.
    pub fn reconcile(
        &self,
        transactions: &[BankTransaction],
        invoices: &[TaxInvoice],
    ) -> Vec<Alert> {
        self.reconcile_with_tolerance(transactions, invoices, DEFAULT_TOLERANCE_PERCENTAGE)
    }

    /// Reconcile with an explicit tolerance percentage.
    pub fn reconcile_with_tolerance(
        &self,
        transactions: &[BankTransaction],
        invoices: &[TaxInvoice],
        tolerance_percentage: u32,
    ) -> Vec<Alert> {
        let total_deposits: u64 = transactions
            .iter()
            .filter(|tx| tx.is_deposit())
            .map(|tx| tx.amount)
            .sum();
        let total_invoiced: u64 = invoices.iter().map(|inv| inv.total_amount).sum();

        let exceeds_tolerance = i128::from(total_deposits) * 100
            > i128::from(total_invoiced) * (100 + i128::from(tolerance_percentage));
        if !exceeds_tolerance {
            tracing::debug!(
                total_deposits,
                total_invoiced,
                tolerance_percentage,
                "deposits within tolerance, no reconciliation alert"
            );
            return Vec::new();
        }

        // The trigger condition implies deposits strictly exceed invoices
        // for any non-negative tolerance, so this cannot underflow.
        let unaccounted_amount = total_deposits - total_invoiced;

        let mut alert = self.taxonomy().alert_template().instantiate();
        alert.alert_id = ALERT_ID.into();
        alert.alert_type = ALERT_TYPE.into();
        alert.priority = Some("High".into());
        alert.title = "Mismatch between total deposits and issued invoices".into();
        alert.summary = format!(
            "Your total bank deposits ({}) significantly exceed your total issued \
             invoices ({}). The difference of {} may indicate unreported revenue.",
            format_thousands(total_deposits),
            format_thousands(total_invoiced),
            format_thousands(unaccounted_amount),
        );
        alert.call_to_action = Some(
            "Review your bank transactions and invoices, and issue new invoices where needed."
                .into(),
        );
        alert.source = SOURCE.into();
        alert.details = Some(ReconciliationDetails {
            total_deposits,
            total_invoiced,
            unaccounted_amount,
            tolerance_percentage,
        });
        vec![alert]
    }
}

#[cfg(test)]
mod tests {
    use counsel_core::{BankTransaction, TaxInvoice, TransactionKind};
    use proptest::prelude::*;

    use crate::testutil;

    fn deposit(amount: u64) -> BankTransaction {
        BankTransaction {
            amount,
            kind: TransactionKind::Deposit,
        }
    }

    fn withdrawal(amount: u64) -> BankTransaction {
        BankTransaction {
            amount,
            kind: TransactionKind::Withdrawal,
        }
    }

    fn invoice(total_amount: u64) -> TaxInvoice {
        TaxInvoice { total_amount }
    }

    #[test]
    fn excess_deposits_emit_fin_002_with_exact_details() {
        let engine = testutil::engine();
        let alerts = engine.reconcile(
            &[deposit(1_000_000), deposit(2_500_000)],
            &[invoice(1_000_000)],
        );
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.alert_id, "FIN-002");
        assert_eq!(alert.priority.as_deref(), Some("High"));
        let details = alert.details.as_ref().unwrap();
        assert_eq!(details.total_deposits, 3_500_000);
        assert_eq!(details.total_invoiced, 1_000_000);
        assert_eq!(details.unaccounted_amount, 2_500_000);
        assert_eq!(details.tolerance_percentage, 5);
    }

    #[test]
    fn summary_renders_thousands_separators() {
        let engine = testutil::engine();
        let alerts = engine.reconcile(&[deposit(3_500_000)], &[invoice(1_000_000)]);
        let summary = &alerts[0].summary;
        assert!(summary.contains("3,500,000"));
        assert!(summary.contains("1,000,000"));
        assert!(summary.contains("2,500,000"));
    }

    #[test]
    fn withdrawals_are_excluded_from_the_deposit_sum() {
        let engine = testutil::engine();
        // Deposits 1,000,000 against invoices 1,000,000 — the 9,000,000
        // withdrawal must not count either way.
        let alerts = engine.reconcile(
            &[deposit(1_000_000), withdrawal(9_000_000)],
            &[invoice(1_000_000)],
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn deposits_within_tolerance_do_not_alert() {
        let engine = testutil::engine();
        // 1,050,000 == 1,000,000 * 1.05 exactly: not strictly greater.
        let alerts = engine.reconcile(&[deposit(1_050_000)], &[invoice(1_000_000)]);
        assert!(alerts.is_empty());
        // One unit above the boundary triggers.
        let alerts = engine.reconcile(&[deposit(1_050_001)], &[invoice(1_000_000)]);
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn under_invoiced_books_never_alert() {
        let engine = testutil::engine();
        let alerts = engine.reconcile(&[deposit(500_000)], &[invoice(5_000_000)]);
        assert!(alerts.is_empty());
    }

    #[test]
    fn empty_inputs_produce_no_alert() {
        let engine = testutil::engine();
        assert!(engine.reconcile(&[], &[]).is_empty());
        assert!(engine.reconcile(&[], &[invoice(1_000_000)]).is_empty());
        // Any deposits against zero invoices exceed every tolerance.
        assert_eq!(engine.reconcile(&[deposit(1)], &[]).len(), 1);
    }

    #[test]
    fn explicit_tolerance_is_honored() {
        let engine = testutil::engine();
        // 50% tolerance allows deposits up to 1.5x invoices.
        let alerts =
            engine.reconcile_with_tolerance(&[deposit(1_400_000)], &[invoice(1_000_000)], 50);
        assert!(alerts.is_empty());
        let alerts =
            engine.reconcile_with_tolerance(&[deposit(1_600_000)], &[invoice(1_000_000)], 50);
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].details.as_ref().unwrap().tolerance_percentage,
            50
        );
    }

    #[test]
    fn alert_carries_template_fields() {
        let engine = testutil::engine();
        let alerts = engine.reconcile(&[deposit(3_500_000)], &[invoice(1_000_000)]);
        assert_eq!(
            alerts[0].extra.get("schema_version"),
            Some(&serde_json::json!("1.0"))
        );
    }

    proptest! {
        /// The alert fires exactly when the integer trigger condition
        /// holds, and the breakdown is loss-free when it does.
        #[test]
        fn trigger_matches_integer_rule(
            deposits in 0u64..=10_000_000_000_000,
            invoiced in 0u64..=10_000_000_000_000,
        ) {
            let engine = testutil::engine();
            let alerts = engine.reconcile(&[deposit(deposits)], &[invoice(invoiced)]);
            let expected = i128::from(deposits) * 100 > i128::from(invoiced) * 105;
            prop_assert_eq!(!alerts.is_empty(), expected);
            if let Some(alert) = alerts.first() {
                let details = alert.details.as_ref().unwrap();
                prop_assert_eq!(details.unaccounted_amount, deposits - invoiced);
            }
        }
    }
}

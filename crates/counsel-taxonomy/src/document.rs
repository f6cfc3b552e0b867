//! # Taxonomy Document Types & Loader
//!
//! The taxonomy is a JSON document with three required top-level keys:
//!
//! - `alert_message_structure` — default field values copied into every
//!   generated alert,
//! - `scale_logic` — one required-document rule per enterprise scale,
//! - `gantt_chart_tasks` — recurring legal-task definitions.
//!
//! A document missing any of these keys is rejected at load time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use counsel_core::Alert;

use crate::error::{TaxonomyError, TaxonomyResult};

/// The immutable alert message template.
///
/// Parsed once at load time into an [`Alert`] prototype; every generated
/// alert starts as a fresh clone of it. The shared prototype is never
/// mutated — rules overwrite fields on their own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertTemplate(Alert);

impl AlertTemplate {
    /// Produce a fresh alert carrying every template field.
    pub fn instantiate(&self) -> Alert {
        self.0.clone()
    }
}

/// Required-document rule for one enterprise scale.
///
/// A scale with an empty `required_compliance` list has no non-trivial
/// rule and never produces an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRule {
    /// Scale name matched exactly against `EnterpriseProfile::scale_name`.
    pub name: String,
    /// Substrings that must each appear in at least one compliance
    /// document on file. Case-sensitive, exact containment.
    #[serde(default)]
    pub required_compliance: Vec<String>,
}

/// How a recurring task's due date is computed for the period containing
/// "today". Closed set; tags this version does not know deserialize to
/// [`DeadlineRule::Unknown`] and are skipped downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineRule {
    /// Last calendar day of the current month.
    #[serde(rename = "end_of_month")]
    EndOfMonth,
    /// Last calendar day of the current quarter, plus 15 days.
    #[serde(rename = "15_days_after_season_end")]
    FifteenDaysAfterSeasonEnd,
    /// Last calendar day of the current quarter, plus 45 days.
    #[serde(rename = "45_days_after_season_end")]
    FortyFiveDaysAfterSeasonEnd,
    /// Unrecognized tag — a taxonomy data-quality issue, not an error.
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// A recurring legal-task definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTask {
    /// Stable task identifier, copied verbatim onto generated tasks.
    pub task_id: String,
    /// Obligation title.
    pub title: String,
    /// Authority the obligation is owed to.
    pub responsible_body: String,
    /// Scale names this task applies to.
    #[serde(rename = "applies_to_scale")]
    pub applies_to_scales: Vec<String>,
    /// Due-date formula.
    pub deadline_rule: DeadlineRule,
}

/// The loaded rule taxonomy, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(rename = "alert_message_structure")]
    alert_template: AlertTemplate,
    #[serde(rename = "scale_logic")]
    scale_rules: Vec<ScaleRule>,
    #[serde(rename = "gantt_chart_tasks")]
    recurring_tasks: Vec<RecurringTask>,
}

impl Taxonomy {
    /// Top-level keys a taxonomy document must carry.
    pub const REQUIRED_KEYS: [&'static str; 3] = [
        "alert_message_structure",
        "scale_logic",
        "gantt_chart_tasks",
    ];

    /// Load a taxonomy from a JSON file.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::NotFound`] when the file does not exist,
    /// [`TaxonomyError::Io`] on any other read failure, and
    /// [`TaxonomyError::Malformed`] / [`TaxonomyError::MissingKey`] when
    /// the content has the wrong shape.
    pub fn from_path(path: impl AsRef<Path>) -> TaxonomyResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                TaxonomyError::NotFound(path.to_path_buf())
            } else {
                TaxonomyError::Io(err)
            }
        })?;
        let taxonomy = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            scale_rules = taxonomy.scale_rules.len(),
            recurring_tasks = taxonomy.recurring_tasks.len(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Parse a taxonomy from raw JSON text.
    pub fn from_json(raw: &str) -> TaxonomyResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Build a taxonomy from an already-parsed JSON value.
    ///
    /// Required keys are checked before structural deserialization so a
    /// missing key reports as [`TaxonomyError::MissingKey`] rather than a
    /// generic parse error.
    pub fn from_value(value: serde_json::Value) -> TaxonomyResult<Self> {
        if let Some(object) = value.as_object() {
            for key in Self::REQUIRED_KEYS {
                if !object.contains_key(key) {
                    return Err(TaxonomyError::MissingKey(key));
                }
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The alert message template.
    pub fn alert_template(&self) -> &AlertTemplate {
        &self.alert_template
    }

    /// All scale rules, in document order.
    pub fn scale_rules(&self) -> &[ScaleRule] {
        &self.scale_rules
    }

    /// Look up the rule for a scale by exact name.
    ///
    /// `None` is the normal outcome for a scale the taxonomy does not
    /// cover — callers map it to "no alert", never to an error.
    pub fn scale_rule(&self, scale_name: &str) -> Option<&ScaleRule> {
        self.scale_rules.iter().find(|rule| rule.name == scale_name)
    }

    /// All recurring legal-task definitions, in document order.
    pub fn recurring_tasks(&self) -> &[RecurringTask] {
        &self.recurring_tasks
    }
}

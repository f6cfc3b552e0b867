//! # counsel-taxonomy — Static Rule Taxonomy
//!
//! The taxonomy is the single rule/config document behind every Counsel
//! evaluation: the alert message template, the scale-based compliance
//! rules, and the recurring legal-task definitions. It is loaded once at
//! engine construction and is immutable for the process lifetime.
//!
//! ## Fail-fast loading
//!
//! There is no safe default ruleset. Loading fails with
//! [`TaxonomyError::NotFound`] when the source is unreachable and
//! [`TaxonomyError::Malformed`] / [`TaxonomyError::MissingKey`] when the
//! content does not parse into the expected structural shape; engine
//! construction must abort on any of these.
//!
//! ## Tolerant content
//!
//! Structure is strict, content is not: the taxonomy is allowed to evolve
//! ahead of the binary. Scales without rule coverage and deadline-rule
//! tags this version does not know ([`DeadlineRule::Unknown`]) are
//! policy no-ops downstream, never errors.

pub mod document;
pub mod error;

// Re-export primary types.
pub use document::{AlertTemplate, DeadlineRule, RecurringTask, ScaleRule, Taxonomy};
pub use error::{TaxonomyError, TaxonomyResult};

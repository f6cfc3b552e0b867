//! # counsel-engine — Rule-Driven Alert & Task Generation
//!
//! Four independent evaluation capabilities sharing one loaded rule
//! taxonomy:
//!
//! - **Compliance Checker** — scale-specific required-document rules
//!   ([`RuleEngine::check_scale_compliance`], alert `CHK-002`).
//! - **Reconciliation Engine** — bank deposits vs. invoiced totals
//!   ([`RuleEngine::reconcile`], alert `FIN-002`).
//! - **Deadline Scheduler** — recurring legal-task expansion for the
//!   current calendar period ([`RuleEngine::generate_legal_tasks`]).
//! - **Brand-Collision Detector** — fuzzy brand matching against freshly
//!   scraped trademarks ([`RuleEngine::check_brand_similarity`],
//!   alert `WTC-001`).
//!
//! ## Evaluation model
//!
//! Every operation is a synchronous, pure function of its inputs plus the
//! immutable taxonomy: no input is mutated, no state is carried across
//! calls, and no I/O happens after construction. A single engine is safe
//! to share across concurrent callers. Callers needing a deterministic
//! "today" (tests, replays) pass the date explicitly instead of relying
//! on the system clock.
//!
//! ## Tolerant evaluation
//!
//! Unknown scale names, empty collections, and unknown deadline-rule tags
//! are policy no-ops, never errors — the taxonomy evolves independently
//! of enterprise data and the engine tolerates partial rule coverage.
//! Only taxonomy loading can fail, and that failure aborts construction.

use std::path::Path;

use counsel_taxonomy::{Taxonomy, TaxonomyResult};

pub mod brandwatch;
pub mod compliance;
pub mod reconcile;
pub mod schedule;
pub mod similarity;

// Re-export rule defaults and the similarity primitive.
pub use brandwatch::DEFAULT_SIMILARITY_THRESHOLD;
pub use reconcile::DEFAULT_TOLERANCE_PERCENTAGE;
pub use similarity::token_set_ratio;

/// The rule-evaluation engine.
///
/// Holds the one immutable [`Taxonomy`] loaded at construction. All
/// evaluation methods live in the capability modules; each borrows the
/// taxonomy read-only and returns freshly constructed alerts or tasks.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    taxonomy: Taxonomy,
}

impl RuleEngine {
    /// Build an engine around an already-loaded taxonomy.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Load the taxonomy from a JSON file and build the engine.
    ///
    /// # Errors
    ///
    /// Any [`counsel_taxonomy::TaxonomyError`] aborts construction — a
    /// partial or default ruleset is never substituted.
    pub fn from_taxonomy_path(path: impl AsRef<Path>) -> TaxonomyResult<Self> {
        Ok(Self::new(Taxonomy::from_path(path)?))
    }

    /// The loaded taxonomy.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }
}

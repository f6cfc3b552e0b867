//! # counsel-core — Domain Records & Output Value Objects
//!
//! The shared data contracts of the Counsel compliance engine. Input
//! records arrive from collaborating subsystems (a persistence layer for
//! enterprise and financial data, a scraping subsystem for public-registry
//! feeds); output records are plain value objects the caller serializes
//! however it likes. Nothing in this crate performs I/O or holds state.
//!
//! ## Design
//!
//! Every record carries exactly the fields the engine reads — the engine
//! is agnostic to whatever storage type the caller keeps around these
//! shapes. Outputs ([`Alert`], [`LegalTask`]) have no identity beyond
//! their content and are never persisted by the engine itself.

pub mod alert;
pub mod money;
pub mod records;
pub mod task;

// Re-export primary types.
pub use alert::{Alert, CallToActionButton, ReconciliationDetails};
pub use money::format_thousands;
pub use records::{
    BankTransaction, EnterpriseProfile, GazetteAnnouncement, TaxInvoice, Trademark,
    TransactionKind,
};
pub use task::{LegalTask, TaskStatus};

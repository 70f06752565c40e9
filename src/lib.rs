//! # Bookkeeping Core
//!
//! The ledger aggregation and financial-statement derivation engine for a
//! small-business bookkeeping tool, together with its tax-split arithmetic.
//!
//! ## Features
//!
//! - **Trial balance**: per-account debit/credit totals with the balance
//!   invariant surfaced, never hidden
//! - **Financial statements**: balance sheet with equity roll-forward, and
//!   profit & loss over a date range
//! - **Account classification**: one canonical keyword classifier with an
//!   explicit chart-of-accounts override, shared by every statement
//! - **Ledger views**: per-account running balances with date and text
//!   filters
//! - **GST calculations**: CGST/SGST, IGST, and VAT splits that never
//!   overwrite caller-supplied components
//! - **Invoice totals**: line-item derivation with strict date handling
//! - **Storage abstraction**: snapshot-oriented, database-agnostic store
//!   trait
//!
//! ## Quick Start
//!
//! ```rust
//! use bookkeeping_core::{build_trial_balance, JournalEntry};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let entries = vec![JournalEntry::new(
//!     "e1".to_string(),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     "Opening sale".to_string(),
//!     "Cash".to_string(),
//!     "Sales Revenue".to_string(),
//!     BigDecimal::from(100),
//! )];
//!
//! let trial_balance = build_trial_balance(&entries);
//! assert!(trial_balance.is_balanced);
//! ```

pub mod books;
pub mod classifier;
pub mod invoice;
pub mod reports;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use books::*;
pub use classifier::*;
pub use invoice::*;
pub use reports::*;
pub use tax::gst::*;
pub use traits::*;
pub use types::*;

//! Financial statement builders
//!
//! Pure, synchronous functions over in-memory snapshots of journal entries.
//! Callers fetch a full snapshot, run it through exactly one builder, and
//! discard it; nothing here reaches back into storage.

pub mod balance_sheet;
pub mod ledger_view;
pub mod profit_loss;
pub mod trial_balance;

pub use balance_sheet::*;
pub use ledger_view::*;
pub use profit_loss::*;
pub use trial_balance::*;

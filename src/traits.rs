//! Storage abstraction
//!
//! The bookkeeping core never reads a process-wide store; callers hand a
//! [`BookStore`] to [`crate::Books`] explicitly. The trait models the
//! external persistent store as an opaque collaborator: it serves full
//! snapshots scoped to a company (tenant), and the core assumes every
//! snapshot it receives is valid, possibly empty.

use async_trait::async_trait;

use crate::types::*;

/// Read access to the external persistent store.
///
/// Implement this for any backend (Postgres, Firestore, in-memory, etc.).
/// Transport failures surface as [`BooksError::Storage`]; an empty snapshot
/// is a normal result, not an error.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every journal entry for a company
    async fn fetch_journal_entries(&self, company_id: &str) -> BooksResult<Vec<JournalEntry>>;

    /// Fetch every invoice for a company
    async fn fetch_invoices(&self, company_id: &str) -> BooksResult<Vec<Invoice>>;

    /// Fetch a single invoice, if it exists
    async fn fetch_invoice_by_id(
        &self,
        company_id: &str,
        invoice_id: &str,
    ) -> BooksResult<Option<Invoice>>;
}

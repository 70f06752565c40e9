//! In-memory store implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::BookStore;
use crate::types::*;

/// In-memory [`BookStore`] keyed by company. Entries are immutable once
/// inserted; they can only be deleted, matching the journal's
/// append-or-delete contract.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<JournalEntry>>>>,
    invoices: Arc<RwLock<HashMap<String, Vec<Invoice>>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a journal entry under a company
    pub fn insert_entry(&self, company_id: &str, entry: JournalEntry) {
        self.entries
            .write()
            .expect("entries lock poisoned")
            .entry(company_id.to_string())
            .or_default()
            .push(entry);
    }

    /// Delete a journal entry by id. Returns whether anything was removed.
    pub fn delete_entry(&self, company_id: &str, entry_id: &str) -> bool {
        let mut entries = self.entries.write().expect("entries lock poisoned");
        match entries.get_mut(company_id) {
            Some(company_entries) => {
                let before = company_entries.len();
                company_entries.retain(|e| e.id != entry_id);
                company_entries.len() != before
            }
            None => false,
        }
    }

    /// Insert an invoice under a company
    pub fn insert_invoice(&self, company_id: &str, invoice: Invoice) {
        self.invoices
            .write()
            .expect("invoices lock poisoned")
            .entry(company_id.to_string())
            .or_default()
            .push(invoice);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.entries.write().expect("entries lock poisoned").clear();
        self.invoices
            .write()
            .expect("invoices lock poisoned")
            .clear();
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn fetch_journal_entries(&self, company_id: &str) -> BooksResult<Vec<JournalEntry>> {
        Ok(self
            .entries
            .read()
            .map_err(|_| BooksError::Storage("entries lock poisoned".to_string()))?
            .get(company_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_invoices(&self, company_id: &str) -> BooksResult<Vec<Invoice>> {
        Ok(self
            .invoices
            .read()
            .map_err(|_| BooksError::Storage("invoices lock poisoned".to_string()))?
            .get(company_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_invoice_by_id(
        &self,
        company_id: &str,
        invoice_id: &str,
    ) -> BooksResult<Option<Invoice>> {
        Ok(self
            .invoices
            .read()
            .map_err(|_| BooksError::Storage("invoices lock poisoned".to_string()))?
            .get(company_id)
            .and_then(|invoices| invoices.iter().find(|i| i.id == invoice_id).cloned()))
    }
}

//! Bookkeeping facade that pairs a store with the report builders
//!
//! Each method fetches one full snapshot, runs it through exactly one
//! builder, and discards it. There is no caching or incremental update;
//! callers wanting fresh numbers call again.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::classifier::AccountClassifier;
use crate::invoice::{compute_invoice_totals_with_summary, InvoiceTotals};
use crate::reports::{
    build_balance_sheet, build_ledger_view, build_profit_and_loss, build_trial_balance,
    BalanceSheetReport, LedgerFilter, ProfitAndLossReport, TrialBalance,
};
use crate::traits::BookStore;
use crate::types::*;

/// Entry point for deriving reports for one company from an external store.
/// The store handle is explicit; there is no global state.
pub struct Books<S: BookStore> {
    store: S,
    classifier: AccountClassifier,
}

impl<S: BookStore> Books<S> {
    /// Create a facade with the keyword-only classifier
    pub fn new(store: S) -> Self {
        Self {
            store,
            classifier: AccountClassifier::new(),
        }
    }

    /// Create a facade with a caller-supplied classifier (e.g. one seeded
    /// with an explicit chart of accounts)
    pub fn with_classifier(store: S, classifier: AccountClassifier) -> Self {
        Self { store, classifier }
    }

    /// The classifier used by every report
    pub fn classifier(&self) -> &AccountClassifier {
        &self.classifier
    }

    /// Trial balance over the company's full journal
    pub async fn trial_balance(&self, company_id: &str) -> BooksResult<TrialBalance> {
        let entries = self.store.fetch_journal_entries(company_id).await?;
        Ok(build_trial_balance(&entries))
    }

    /// Balance sheet over the company's full journal
    pub async fn balance_sheet(&self, company_id: &str) -> BooksResult<BalanceSheetReport> {
        let entries = self.store.fetch_journal_entries(company_id).await?;
        Ok(build_balance_sheet(&entries, &self.classifier))
    }

    /// Profit and loss statement for an inclusive date range
    pub async fn profit_and_loss(
        &self,
        company_id: &str,
        period: DateRange,
    ) -> BooksResult<ProfitAndLossReport> {
        let entries = self.store.fetch_journal_entries(company_id).await?;
        Ok(build_profit_and_loss(&entries, period, &self.classifier))
    }

    /// Ledger view for one account, with optional filters
    pub async fn ledger_view(
        &self,
        company_id: &str,
        account: &str,
        filter: &LedgerFilter,
    ) -> BooksResult<Vec<LedgerTransaction>> {
        let entries = self.store.fetch_journal_entries(company_id).await?;
        Ok(build_ledger_view(&entries, account, filter, &self.classifier))
    }

    /// Recompute totals for a stored invoice
    pub async fn invoice_totals(
        &self,
        company_id: &str,
        invoice_id: &str,
    ) -> BooksResult<InvoiceTotals> {
        let invoice = self
            .store
            .fetch_invoice_by_id(company_id, invoice_id)
            .await?
            .ok_or_else(|| BooksError::InvoiceNotFound(invoice_id.to_string()))?;
        Ok(compute_invoice_totals_with_summary(
            &invoice.line_items,
            Some(&invoice.sub_total),
        ))
    }

    /// Run the reconciliation checks over one snapshot: trial balance
    /// debits vs credits, and assets vs liabilities + equity. Imbalances are
    /// reported, never raised as errors.
    pub async fn check_integrity(&self, company_id: &str) -> BooksResult<IntegrityReport> {
        let entries = self.store.fetch_journal_entries(company_id).await?;

        let trial_balance = build_trial_balance(&entries);
        let balance_sheet = build_balance_sheet(&entries, &self.classifier);

        let mut issues = Vec::new();
        if !trial_balance.is_balanced {
            issues.push(format!(
                "Trial balance is not balanced: debits = {}, credits = {}",
                trial_balance.total_debits, trial_balance.total_credits
            ));
        }
        if !balance_sheet.is_balanced {
            issues.push(format!(
                "Balance sheet is not balanced: assets = {}, liabilities + equity = {}, off by {}",
                balance_sheet.total_assets,
                &balance_sheet.total_liabilities + &balance_sheet.equity.ending_equity,
                balance_sheet.discrepancy
            ));
        }

        Ok(IntegrityReport {
            is_valid: issues.is_empty(),
            issues,
            trial_balance_discrepancy: trial_balance.discrepancy,
            balance_sheet_discrepancy: balance_sheet.discrepancy,
        })
    }
}

/// Outcome of the reconciliation checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub trial_balance_discrepancy: BigDecimal,
    pub balance_sheet_discrepancy: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_store::MemoryStore;
    use chrono::NaiveDate;

    fn entry(id: &str, debit: &str, credit: &str, amount: i64) -> JournalEntry {
        JournalEntry::new(
            id.to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            format!("entry {id}"),
            debit.to_string(),
            credit.to_string(),
            BigDecimal::from(amount),
        )
    }

    #[tokio::test]
    async fn facade_runs_builders_over_store_snapshots() {
        let store = MemoryStore::new();
        store.insert_entry("acme", entry("1", "Cash", "Owner's Capital", 1000));
        store.insert_entry("acme", entry("2", "Cash", "Sales Revenue", 500));

        let books = Books::new(store);

        let tb = books.trial_balance("acme").await.unwrap();
        assert!(tb.is_balanced);
        assert_eq!(tb.rows.len(), 3);

        let bs = books.balance_sheet("acme").await.unwrap();
        assert!(bs.is_balanced);

        let integrity = books.check_integrity("acme").await.unwrap();
        assert!(integrity.is_valid);
        assert!(integrity.issues.is_empty());
    }

    #[tokio::test]
    async fn missing_invoice_is_an_error() {
        let books = Books::new(MemoryStore::new());
        let result = books.invoice_totals("acme", "nope").await;
        assert!(matches!(result, Err(BooksError::InvoiceNotFound(_))));
    }
}

//! Per-account ledger view
//!
//! Produces the chronological transaction list for a single account with a
//! running balance. The balance direction follows the account's class: debit
//! activity grows an asset or expense ledger, credit activity grows a
//! revenue or liability ledger, so every ledger trends positive under normal
//! use.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classifier::AccountClassifier;
use crate::types::{EntrySide, JournalEntry, LedgerTransaction};
use crate::utils::rounding::round2;

/// Optional filters for a ledger view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerFilter {
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
    /// Case-insensitive substring match on the entry description
    pub search: Option<String>,
}

/// Build the ledger view for one account (exact name match).
///
/// Entries are ordered by `(date, created_at, id)` so the running balance is
/// deterministic even when several entries share a date. An entry carrying
/// the account on both sides applies both adjustments and nets to zero.
/// Malformed entries are skipped.
pub fn build_ledger_view(
    entries: &[JournalEntry],
    account: &str,
    filter: &LedgerFilter,
    classifier: &AccountClassifier,
) -> Vec<LedgerTransaction> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());

    let mut selected: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.validate().is_ok())
        .filter(|e| e.debit_account == account || e.credit_account == account)
        .filter(|e| filter.from.is_none_or(|from| e.date >= from))
        .filter(|e| filter.to.is_none_or(|to| e.date <= to))
        .filter(|e| {
            needle
                .as_ref()
                .is_none_or(|n| e.description.to_lowercase().contains(n))
        })
        .collect();

    selected.sort_by(|a, b| {
        (a.date, a.created_at, a.id.as_str()).cmp(&(b.date, b.created_at, b.id.as_str()))
    });

    // Debit grows debit-normal ledgers, credit grows credit-normal ones
    let debit_grows = classifier.classify(account).normal_balance() == EntrySide::Debit;

    let mut balance = BigDecimal::from(0);
    selected
        .into_iter()
        .map(|entry| {
            let is_debit = entry.debit_account == account;
            let is_credit = entry.credit_account == account;

            if is_debit {
                if debit_grows {
                    balance += &entry.amount;
                } else {
                    balance -= &entry.amount;
                }
            }
            if is_credit {
                if debit_grows {
                    balance -= &entry.amount;
                } else {
                    balance += &entry.amount;
                }
            }

            LedgerTransaction {
                id: entry.id.clone(),
                date: entry.date,
                description: entry.description.clone(),
                debit: is_debit.then(|| round2(&entry.amount)),
                credit: is_credit.then(|| round2(&entry.amount)),
                balance: round2(&balance),
                tags: entry.tags.clone(),
            }
        })
        .collect()
}

//! Trial balance aggregation
//!
//! Folds a snapshot of journal entries into per-account debit/credit totals.
//! Account names are matched case-sensitively: "Cash" and "cash" are
//! distinct accounts.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{AccountBalance, JournalEntry};
use crate::utils::rounding::round2;

/// Trial balance report: one row per distinct account name, sorted by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalance {
    pub rows: Vec<AccountBalance>,
    pub total_debits: BigDecimal,
    pub total_credits: BigDecimal,
    /// Always true for well-formed input; an imbalance indicates a defect
    /// upstream and is surfaced here rather than hidden
    pub is_balanced: bool,
    /// `total_debits - total_credits`, zero when balanced
    pub discrepancy: BigDecimal,
}

/// Build a trial balance from a snapshot of journal entries.
///
/// Every entry posts its amount to the debit account's debit column and the
/// credit account's credit column, so the totals balance by construction.
/// Malformed entries (non-positive amount, blank account name) are skipped
/// and the rest of the snapshot is still aggregated.
pub fn build_trial_balance(entries: &[JournalEntry]) -> TrialBalance {
    let mut totals: BTreeMap<String, (BigDecimal, BigDecimal)> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.validate().is_ok()) {
        let debit_row = totals
            .entry(entry.debit_account.clone())
            .or_insert_with(|| (BigDecimal::from(0), BigDecimal::from(0)));
        debit_row.0 += &entry.amount;

        let credit_row = totals
            .entry(entry.credit_account.clone())
            .or_insert_with(|| (BigDecimal::from(0), BigDecimal::from(0)));
        credit_row.1 += &entry.amount;
    }

    let mut total_debits = BigDecimal::from(0);
    let mut total_credits = BigDecimal::from(0);
    let rows: Vec<AccountBalance> = totals
        .into_iter()
        .map(|(account_name, (debit, credit))| {
            total_debits += &debit;
            total_credits += &credit;
            AccountBalance {
                account_name,
                debit: round2(&debit),
                credit: round2(&credit),
            }
        })
        .collect();

    let total_debits = round2(&total_debits);
    let total_credits = round2(&total_credits);
    let discrepancy = round2(&(&total_debits - &total_credits));

    TrialBalance {
        rows,
        is_balanced: total_debits == total_credits,
        total_debits,
        total_credits,
        discrepancy,
    }
}

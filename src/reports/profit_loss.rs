//! Profit and loss derivation
//!
//! Buckets period activity into revenue and expenses: a credited account
//! that classifies as Income earns revenue, a debited account that
//! classifies as Expense incurs cost. Uses the same canonical classifier as
//! the balance sheet, so the two statements cannot disagree about what
//! counts as income.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classifier::AccountClassifier;
use crate::types::{AccountClass, ClassifiedAccount, DateRange, JournalEntry};
use crate::utils::rounding::round2;

/// Profit and loss statement for an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLossReport {
    pub period: DateRange,
    /// Revenue by account, largest first
    pub revenue: Vec<ClassifiedAccount>,
    /// Expenses by account, largest first
    pub expenses: Vec<ClassifiedAccount>,
    pub total_revenue: BigDecimal,
    pub total_expenses: BigDecimal,
    pub net_profit: BigDecimal,
}

/// Build a profit and loss statement over `[period.from, period.to]`.
/// Malformed entries are skipped; an empty or out-of-range snapshot yields a
/// zeroed report.
pub fn build_profit_and_loss(
    entries: &[JournalEntry],
    period: DateRange,
    classifier: &AccountClassifier,
) -> ProfitAndLossReport {
    let mut revenue_buckets: BTreeMap<String, BigDecimal> = BTreeMap::new();
    let mut expense_buckets: BTreeMap<String, BigDecimal> = BTreeMap::new();

    for entry in entries
        .iter()
        .filter(|e| e.validate().is_ok() && period.contains(e.date))
    {
        if classifier.classify(&entry.credit_account) == AccountClass::Income {
            *revenue_buckets
                .entry(entry.credit_account.clone())
                .or_insert_with(|| BigDecimal::from(0)) += &entry.amount;
        }
        if classifier.classify(&entry.debit_account) == AccountClass::Expense {
            *expense_buckets
                .entry(entry.debit_account.clone())
                .or_insert_with(|| BigDecimal::from(0)) += &entry.amount;
        }
    }

    let revenue = sorted_descending(revenue_buckets);
    let expenses = sorted_descending(expense_buckets);

    let total_revenue = round2(&revenue.iter().map(|a| &a.balance).sum::<BigDecimal>());
    let total_expenses = round2(&expenses.iter().map(|a| &a.balance).sum::<BigDecimal>());
    let net_profit = round2(&(&total_revenue - &total_expenses));

    ProfitAndLossReport {
        period,
        revenue,
        expenses,
        total_revenue,
        total_expenses,
        net_profit,
    }
}

/// Descending by amount, ties broken by name ascending (the BTreeMap source
/// is already name-ordered, and the sort is stable)
fn sorted_descending(buckets: BTreeMap<String, BigDecimal>) -> Vec<ClassifiedAccount> {
    let mut accounts: Vec<ClassifiedAccount> = buckets
        .into_iter()
        .map(|(name, balance)| ClassifiedAccount {
            name,
            balance: round2(&balance),
        })
        .collect();
    accounts.sort_by(|a, b| b.balance.cmp(&a.balance));
    accounts
}

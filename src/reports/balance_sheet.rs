//! Balance sheet derivation
//!
//! Computes a net balance per account (+debit, -credit), classifies each
//! account through the canonical classifier, folds income and expense
//! activity into a single current-period net income figure, and rolls equity
//! forward: ending equity = beginning equity + net income - drawings.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classifier::AccountClassifier;
use crate::types::{AccountClass, ClassifiedAccount, JournalEntry};
use crate::utils::rounding::{round2, within_one_cent};

/// Equity section of the balance sheet, carried forward from beginning
/// equity through period activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityRollForward {
    pub beginning_equity: Vec<ClassifiedAccount>,
    pub drawings: Vec<ClassifiedAccount>,
    pub total_beginning_equity: BigDecimal,
    /// Net effect of all income and expense accounts for the period
    pub net_income: BigDecimal,
    pub total_drawings: BigDecimal,
    pub ending_equity: BigDecimal,
}

/// Classified, totaled balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    pub assets: Vec<ClassifiedAccount>,
    pub liabilities: Vec<ClassifiedAccount>,
    pub equity: EquityRollForward,
    /// Unclassifiable accounts with a non-zero net balance. Listed so the
    /// report is never silently short; not included in section totals.
    pub other: Vec<ClassifiedAccount>,
    pub total_assets: BigDecimal,
    pub total_liabilities: BigDecimal,
    /// Whether assets = liabilities + ending equity within one cent
    pub is_balanced: bool,
    /// `total_assets - (total_liabilities + ending_equity)`. A non-zero
    /// value is a reconciliation warning for the caller, never an error.
    pub discrepancy: BigDecimal,
}

/// Build a balance sheet from a snapshot of journal entries.
///
/// Accounts whose net balance contradicts their class's normal side (for
/// example a credit-heavy asset) are omitted from the presentation; the
/// resulting imbalance shows up in `discrepancy` rather than being silently
/// corrected. Malformed entries are skipped.
pub fn build_balance_sheet(
    entries: &[JournalEntry],
    classifier: &AccountClassifier,
) -> BalanceSheetReport {
    let mut nets: BTreeMap<String, BigDecimal> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.validate().is_ok()) {
        *nets
            .entry(entry.debit_account.clone())
            .or_insert_with(|| BigDecimal::from(0)) += &entry.amount;
        *nets
            .entry(entry.credit_account.clone())
            .or_insert_with(|| BigDecimal::from(0)) -= &entry.amount;
    }

    let zero = BigDecimal::from(0);
    let mut assets = Vec::new();
    let mut liabilities = Vec::new();
    let mut beginning_equity = Vec::new();
    let mut drawings = Vec::new();
    let mut other = Vec::new();
    let mut net_income = BigDecimal::from(0);

    for (name, net) in nets {
        if net == zero {
            continue;
        }
        match classifier.classify(&name) {
            AccountClass::Asset if net > zero => assets.push(ClassifiedAccount {
                name,
                balance: round2(&net),
            }),
            AccountClass::Drawing if net > zero => drawings.push(ClassifiedAccount {
                name,
                balance: round2(&net),
            }),
            // Credit-normal sections are presented as positive magnitudes
            AccountClass::Liability if net < zero => liabilities.push(ClassifiedAccount {
                name,
                balance: round2(&-net),
            }),
            AccountClass::BeginningEquity if net < zero => {
                beginning_equity.push(ClassifiedAccount {
                    name,
                    balance: round2(&-net),
                })
            }
            AccountClass::Income | AccountClass::Expense => {
                // Credit-heavy income contributes positively, debit-heavy
                // expense negatively, once negated
                net_income -= net;
            }
            AccountClass::Unclassified => other.push(ClassifiedAccount {
                name,
                balance: round2(&net),
            }),
            // Sign contradicts the class's normal balance; omitted from the
            // presentation, surfaced through the discrepancy
            _ => {}
        }
    }

    let total_assets = round2(&assets.iter().map(|a| &a.balance).sum::<BigDecimal>());
    let total_liabilities = round2(&liabilities.iter().map(|a| &a.balance).sum::<BigDecimal>());
    let total_beginning_equity = round2(
        &beginning_equity
            .iter()
            .map(|a| &a.balance)
            .sum::<BigDecimal>(),
    );
    let total_drawings = round2(&drawings.iter().map(|a| &a.balance).sum::<BigDecimal>());
    let net_income = round2(&net_income);
    let ending_equity = round2(&(&total_beginning_equity + &net_income - &total_drawings));

    let counterweight = &total_liabilities + &ending_equity;
    let discrepancy = round2(&(&total_assets - &counterweight));
    let is_balanced = within_one_cent(&total_assets, &counterweight);

    BalanceSheetReport {
        assets,
        liabilities,
        equity: EquityRollForward {
            beginning_equity,
            drawings,
            total_beginning_equity,
            net_income,
            total_drawings,
            ending_equity,
        },
        other,
        total_assets,
        total_liabilities,
        is_balanced,
        discrepancy,
    }
}

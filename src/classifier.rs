//! Account classification
//!
//! Maps free-text account names to a canonical [`AccountClass`]. Every report
//! builder in this crate classifies through this one module, so the income
//! and expense vocabularies cannot drift between statements.
//!
//! Classification prefers an explicit chart-of-accounts lookup (exact name
//! match, registered by the caller) and falls back to keyword heuristics for
//! legacy data that was never assigned a class.

use crate::types::AccountClass;
use std::collections::HashMap;

const ASSET_KEYWORDS: &[&str] = &[
    "cash",
    "bank",
    "receivable",
    "inventory",
    "stock",
    "equipment",
    "furniture",
    "machinery",
    "vehicle",
    "building",
    "land",
    "deposit",
    "prepaid",
    "advance",
    "investment",
];

const LIABILITY_KEYWORDS: &[&str] = &[
    "payable",
    "loan",
    "credit card",
    "overdraft",
    "mortgage",
    "accrued",
    "unearned",
    "outstanding",
];

const BEGINNING_EQUITY_KEYWORDS: &[&str] = &[
    "capital",
    "retained earnings",
    "opening balance",
    "beginning equity",
    "owner's equity",
    "owners equity",
];

const DRAWING_KEYWORDS: &[&str] = &["drawing", "draw", "withdrawal", "personal"];

const INCOME_KEYWORDS: &[&str] = &[
    "revenue",
    "sales",
    "income",
    "service",
    "commission",
    "fees earned",
    "interest received",
    "discount received",
];

const EXPENSE_KEYWORDS: &[&str] = &[
    "expense",
    "rent",
    "salary",
    "salaries",
    "wages",
    "utilities",
    "electricity",
    "telephone",
    "internet",
    "insurance",
    "maintenance",
    "repairs",
    "advertising",
    "marketing",
    "travel",
    "fuel",
    "supplies",
    "stationery",
    "depreciation",
    "purchase",
    "freight",
    "interest paid",
    "bank charges",
];

/// Classifier with an explicit chart-of-accounts override and a keyword
/// fallback. Pure and deterministic: the same name always resolves to the
/// same class.
#[derive(Debug, Clone, Default)]
pub struct AccountClassifier {
    chart: HashMap<String, AccountClass>,
}

impl AccountClassifier {
    /// Create a classifier with no chart entries (keyword-only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier seeded with a chart of accounts
    pub fn with_chart(chart: HashMap<String, AccountClass>) -> Self {
        Self { chart }
    }

    /// Register an explicit class for an account name. Exact-match entries
    /// always win over the keyword heuristic.
    pub fn register(&mut self, name: impl Into<String>, class: AccountClass) {
        self.chart.insert(name.into(), class);
    }

    /// Resolve an account name to its class. Total: always returns a class,
    /// defaulting to [`AccountClass::Unclassified`] when nothing matches.
    pub fn classify(&self, name: &str) -> AccountClass {
        if let Some(class) = self.chart.get(name) {
            return *class;
        }
        classify_by_keywords(name)
    }
}

/// Classify an account name with the keyword heuristic alone
pub fn classify_account(name: &str) -> AccountClass {
    classify_by_keywords(name)
}

/// Keyword resolution. A name may hit several keyword sets; conflicts are
/// settled by two zeroing rules and then a fixed order, so the result never
/// depends on iteration order:
/// 1. a hit in income/expense/drawing/beginning-equity discards asset and
///    liability hits;
/// 2. an income or expense hit discards a drawing hit;
/// 3. survivors resolve as Income > Expense > BeginningEquity > Drawing >
///    Asset > Liability.
fn classify_by_keywords(name: &str) -> AccountClass {
    let lower = name.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    let income = hit(INCOME_KEYWORDS);
    let expense = hit(EXPENSE_KEYWORDS);
    let beginning_equity = hit(BEGINNING_EQUITY_KEYWORDS);
    let mut drawing = hit(DRAWING_KEYWORDS);
    let mut asset = hit(ASSET_KEYWORDS);
    let mut liability = hit(LIABILITY_KEYWORDS);

    if income || expense || drawing || beginning_equity {
        asset = false;
        liability = false;
    }
    if income || expense {
        drawing = false;
    }

    if income {
        AccountClass::Income
    } else if expense {
        AccountClass::Expense
    } else if beginning_equity {
        AccountClass::BeginningEquity
    } else if drawing {
        AccountClass::Drawing
    } else if asset {
        AccountClass::Asset
    } else if liability {
        AccountClass::Liability
    } else {
        AccountClass::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_accounts() {
        assert_eq!(classify_account("Cash"), AccountClass::Asset);
        assert_eq!(classify_account("Bank of Baroda"), AccountClass::Asset);
        assert_eq!(
            classify_account("Accounts Receivable"),
            AccountClass::Asset
        );
        assert_eq!(
            classify_account("Accounts Payable"),
            AccountClass::Liability
        );
        assert_eq!(classify_account("Business Loan"), AccountClass::Liability);
        assert_eq!(
            classify_account("Owner's Equity"),
            AccountClass::BeginningEquity
        );
        assert_eq!(
            classify_account("Retained Earnings"),
            AccountClass::BeginningEquity
        );
        assert_eq!(classify_account("Owner's Draw"), AccountClass::Drawing);
        assert_eq!(classify_account("Sales Revenue"), AccountClass::Income);
        assert_eq!(classify_account("Service Income"), AccountClass::Income);
        assert_eq!(classify_account("Rent"), AccountClass::Expense);
        assert_eq!(classify_account("Office Supplies"), AccountClass::Expense);
    }

    #[test]
    fn unknown_names_fall_through() {
        assert_eq!(classify_account("Zorp"), AccountClass::Unclassified);
        assert_eq!(classify_account(""), AccountClass::Unclassified);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_account("CASH"), AccountClass::Asset);
        assert_eq!(classify_account("accounts payable"), AccountClass::Liability);
    }

    #[test]
    fn income_and_expense_beat_asset_and_liability() {
        // "Prepaid Rent" hits both the asset and expense sets
        assert_eq!(classify_account("Prepaid Rent"), AccountClass::Expense);
        // "Interest Received" hits income; "bank" alone would be an asset
        assert_eq!(
            classify_account("Bank Interest Received"),
            AccountClass::Income
        );
    }

    #[test]
    fn income_beats_drawing() {
        // hits both "draw"-style and income keywords
        assert_eq!(
            classify_account("Drawings Recovered Income"),
            AccountClass::Income
        );
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..100 {
            assert_eq!(
                classify_account("Accounts Payable"),
                AccountClass::Liability
            );
            assert_eq!(classify_account("Owner's Draw"), AccountClass::Drawing);
        }
    }

    #[test]
    fn chart_entries_override_keywords() {
        let mut classifier = AccountClassifier::new();
        // "Security Deposit" would be an asset by keyword
        classifier.register("Security Deposit", AccountClass::Liability);
        assert_eq!(
            classifier.classify("Security Deposit"),
            AccountClass::Liability
        );
        // other names still go through keywords
        assert_eq!(classifier.classify("Cash"), AccountClass::Asset);
        // exact match only; a different casing is a different account
        assert_eq!(
            classifier.classify("security deposit"),
            AccountClass::Asset
        );
    }
}

//! Core types and data structures for the bookkeeping system

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Account classes used to place an account on the financial statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClass {
    /// Assets - what the business owns (Cash, Inventory, Equipment, etc.)
    Asset,
    /// Liabilities - what the business owes (Loans, Accounts Payable, etc.)
    Liability,
    /// Owner capital carried into the period (Capital, Retained Earnings, etc.)
    BeginningEquity,
    /// Owner withdrawals during the period
    Drawing,
    /// Income/Revenue - money earned by the business
    Income,
    /// Expenses - costs incurred by the business
    Expense,
    /// No keyword or chart entry matched; bucketed as "Other" on reports
    Unclassified,
}

impl AccountClass {
    /// Returns the normal balance side for this account class.
    /// Assets, Drawings, and Expenses normally carry debit balances;
    /// Liabilities, Beginning Equity, and Income carry credit balances.
    /// Unclassified accounts are treated as debit-normal.
    pub fn normal_balance(&self) -> EntrySide {
        match self {
            AccountClass::Asset
            | AccountClass::Drawing
            | AccountClass::Expense
            | AccountClass::Unclassified => EntrySide::Debit,
            AccountClass::Liability | AccountClass::BeginningEquity | AccountClass::Income => {
                EntrySide::Credit
            }
        }
    }
}

/// The two sides of a double-entry posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntrySide {
    /// Debit side - increases Assets, Drawings, and Expenses
    Debit,
    /// Credit side - increases Liabilities, Equity, and Income
    Credit,
}

/// GST treatment of a transaction or line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GstType {
    /// Integrated GST, levied on inter-state supply
    Igst,
    /// Central + State GST pair, levied on intra-state supply
    CgstSgst,
    /// Value-added tax (non-GST jurisdictions)
    Vat,
    /// No tax applies
    None,
}

/// GST breakdown attached to a journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GstDetails {
    /// How the tax splits across components
    pub gst_type: Option<GstType>,
    /// Total GST rate percentage (e.g. 18 for 18%)
    pub gst_rate: Option<BigDecimal>,
    /// Amount the tax was computed on (exclusive of tax)
    pub taxable_amount: Option<BigDecimal>,
    pub igst_amount: Option<BigDecimal>,
    pub cgst_amount: Option<BigDecimal>,
    pub sgst_amount: Option<BigDecimal>,
    pub vat_amount: Option<BigDecimal>,
    /// Whether the supply crossed state lines
    pub is_inter_state: Option<bool>,
}

/// A single double-entry journal entry. Immutable once created; it may be
/// deleted but never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for the entry
    pub id: String,
    /// Calendar date the transaction occurred, no time component
    pub date: NaiveDate,
    /// Description of the transaction
    pub description: String,
    /// Free-text name of the account debited
    pub debit_account: String,
    /// Free-text name of the account credited
    pub credit_account: String,
    /// Amount posted to both sides; must be positive
    pub amount: BigDecimal,
    /// Optional free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional GST breakdown
    #[serde(default)]
    pub gst: Option<GstDetails>,
    /// Insertion instant, used as the ordering tie-break within a date
    pub created_at: NaiveDateTime,
}

impl JournalEntry {
    /// Create a new journal entry with the insertion instant set to now
    pub fn new(
        id: String,
        date: NaiveDate,
        description: String,
        debit_account: String,
        credit_account: String,
        amount: BigDecimal,
    ) -> Self {
        Self {
            id,
            date,
            description,
            debit_account,
            credit_account,
            amount,
            tags: Vec::new(),
            gst: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach tags to the entry
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Check the entry is usable by the report builders. A same-account
    /// debit/credit pair is tolerated here; garbage-in is not rejected.
    pub fn validate(&self) -> BooksResult<()> {
        if self.amount <= BigDecimal::from(0) {
            return Err(BooksError::Validation(format!(
                "entry '{}' has non-positive amount {}",
                self.id, self.amount
            )));
        }
        if self.debit_account.trim().is_empty() || self.credit_account.trim().is_empty() {
            return Err(BooksError::Validation(format!(
                "entry '{}' is missing an account name",
                self.id
            )));
        }
        Ok(())
    }
}

/// Invoice lifecycle status. Any value may be set by the owner at any time;
/// there is no enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Void,
}

/// A single invoice line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// Quantity; must be at least 0.01
    pub quantity: BigDecimal,
    /// Price per unit before tax; must be non-negative
    pub unit_price: BigDecimal,
    /// Line amount; derived as quantity x unit_price when absent
    #[serde(default)]
    pub amount: Option<BigDecimal>,
    /// Optional HSN/SAC classification code
    #[serde(default)]
    pub hsn_sac_code: Option<String>,
    /// Optional GST rate percentage in [0, 100]
    #[serde(default)]
    pub gst_rate: Option<BigDecimal>,
}

/// A normalized invoice with derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub line_items: Vec<LineItem>,
    /// Free-text summary used when no structured line items were entered.
    /// Both may be present on read.
    pub items_summary: Option<String>,
    pub sub_total: BigDecimal,
    pub total_gst_amount: BigDecimal,
    pub total_amount: BigDecimal,
    pub status: InvoiceStatus,
}

/// One trial balance row: accumulated debit and credit totals for an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_name: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
}

/// A classified account line on a financial statement. Derived, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAccount {
    pub name: String,
    pub balance: BigDecimal,
}

/// One row of a per-account ledger view with its running balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Amount if the account was on the debit side of the entry
    pub debit: Option<BigDecimal>,
    /// Amount if the account was on the credit side of the entry
    pub credit: Option<BigDecimal>,
    pub balance: BigDecimal,
    pub tags: Vec<String>,
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Errors that can occur in the bookkeeping system
#[derive(Debug, thiserror::Error)]
pub enum BooksError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type for bookkeeping operations
pub type BooksResult<T> = Result<T, BooksError>;

//! Invoice totals and normalization
//!
//! Derives per-line amounts and document-level subtotal, GST, and grand
//! total from a set of line items, and normalizes raw invoice drafts
//! (defaulted numbers and dates, strictly parsed due dates).

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Invoice, InvoiceStatus, LineItem};
use crate::utils::rounding::round2;
use crate::utils::validation::{parse_strict_date, validate_line_item};

/// Document-level invoice totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub sub_total: BigDecimal,
    pub total_gst_amount: BigDecimal,
    pub total_amount: BigDecimal,
}

/// Raw invoice data as entered or extracted, before normalization. Dates
/// arrive as strings because upstream sources (forms, document extraction)
/// cannot be trusted to produce valid calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvoiceDraft {
    pub id: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub due_date: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub items_summary: Option<String>,
    /// Externally supplied total, used when no line items exist
    pub summary_total: Option<BigDecimal>,
    pub status: Option<InvoiceStatus>,
}

/// The amount a line item contributes: its stored amount if present,
/// otherwise quantity x unit price rounded to two decimals.
pub fn line_amount(item: &LineItem) -> BigDecimal {
    match &item.amount {
        Some(amount) => round2(amount),
        None => round2(&(&item.quantity * &item.unit_price)),
    }
}

/// Compute invoice totals from line items. Items failing validation are
/// skipped and the rest still total up.
pub fn compute_invoice_totals(line_items: &[LineItem]) -> InvoiceTotals {
    compute_invoice_totals_with_summary(line_items, None)
}

/// Like [`compute_invoice_totals`], but with an externally supplied summary
/// total to fall back on when there are no line items at all.
pub fn compute_invoice_totals_with_summary(
    line_items: &[LineItem],
    summary_total: Option<&BigDecimal>,
) -> InvoiceTotals {
    let valid: Vec<&LineItem> = line_items
        .iter()
        .filter(|item| validate_line_item(item).is_ok())
        .collect();

    if valid.is_empty() {
        let sub_total = summary_total.map(round2).unwrap_or_else(|| round2(&BigDecimal::from(0)));
        return InvoiceTotals {
            total_amount: sub_total.clone(),
            total_gst_amount: round2(&BigDecimal::from(0)),
            sub_total,
        };
    }

    let mut sub_total = BigDecimal::from(0);
    let mut total_gst = BigDecimal::from(0);
    for item in valid {
        let amount = line_amount(item);
        if let Some(rate) = &item.gst_rate {
            total_gst += (&amount * rate) / BigDecimal::from(100);
        }
        sub_total += amount;
    }

    let sub_total = round2(&sub_total);
    let total_gst_amount = round2(&total_gst);
    let total_amount = round2(&(&sub_total + &total_gst_amount));

    InvoiceTotals {
        sub_total,
        total_gst_amount,
        total_amount,
    }
}

/// Normalize a draft into an invoice, defaulting the invoice date to today.
pub fn normalize_invoice(draft: InvoiceDraft) -> Invoice {
    normalize_invoice_as_of(draft, chrono::Utc::now().date_naive())
}

/// Normalize a draft into an invoice as of a given "today".
///
/// - missing invoice numbers get a fresh unique string;
/// - a missing or malformed invoice date becomes `today`;
/// - a due date must parse as strict `YYYY-MM-DD` or is discarded, never
///   coerced to some epoch date;
/// - valid line items get their derived amounts filled in.
pub fn normalize_invoice_as_of(draft: InvoiceDraft, today: NaiveDate) -> Invoice {
    let invoice_number = draft
        .invoice_number
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("INV-{}", Uuid::new_v4().simple()));

    let invoice_date = draft
        .invoice_date
        .as_deref()
        .and_then(|raw| parse_strict_date(raw).ok())
        .unwrap_or(today);

    let due_date = draft
        .due_date
        .as_deref()
        .and_then(|raw| parse_strict_date(raw).ok());

    let line_items: Vec<LineItem> = draft
        .line_items
        .into_iter()
        .map(|mut item| {
            if item.amount.is_none() && validate_line_item(&item).is_ok() {
                item.amount = Some(round2(&(&item.quantity * &item.unit_price)));
            }
            item
        })
        .collect();

    let totals = compute_invoice_totals_with_summary(&line_items, draft.summary_total.as_ref());

    Invoice {
        id: draft
            .id
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string()),
        invoice_number,
        invoice_date,
        due_date,
        line_items,
        items_summary: draft.items_summary,
        sub_total: totals.sub_total,
        total_gst_amount: totals.total_gst_amount,
        total_amount: totals.total_amount,
        status: draft.status.unwrap_or_default(),
    }
}

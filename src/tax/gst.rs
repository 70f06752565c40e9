//! GST/VAT split engine
//!
//! Computes and validates the tax breakdown for a monetary line item:
//! intra-state supply splits the tax evenly into a CGST/SGST pair,
//! inter-state supply carries the full amount as IGST, and VAT jurisdictions
//! carry a single VAT amount. Component amounts supplied by the caller are
//! never overwritten, so the engine is idempotent on already-split data.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{GstDetails, GstType};
use crate::utils::rounding::round2;

/// Input to a tax split. `amount` is the tax-inclusive total; when
/// `taxable_amount` is absent it is backed out of `amount` and the rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaxSplitInput {
    /// Tax-inclusive total, used to derive the taxable amount when absent
    pub amount: Option<BigDecimal>,
    /// Amount the tax applies to, exclusive of tax
    pub taxable_amount: Option<BigDecimal>,
    /// Total GST rate percentage
    pub gst_rate: Option<BigDecimal>,
    pub gst_type: Option<GstType>,
    pub igst_amount: Option<BigDecimal>,
    pub cgst_amount: Option<BigDecimal>,
    pub sgst_amount: Option<BigDecimal>,
    pub vat_amount: Option<BigDecimal>,
}

/// Resolved tax breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSplitResult {
    pub gst_type: GstType,
    pub gst_rate: Option<BigDecimal>,
    pub taxable_amount: BigDecimal,
    pub igst_amount: Option<BigDecimal>,
    pub cgst_amount: Option<BigDecimal>,
    pub sgst_amount: Option<BigDecimal>,
    pub vat_amount: Option<BigDecimal>,
    /// Sum of the populated components
    pub total_tax: BigDecimal,
}

impl TaxSplitResult {
    /// Feed a result back in as input, e.g. to re-run the split over stored
    /// data. Populated components survive unchanged.
    pub fn into_input(self) -> TaxSplitInput {
        TaxSplitInput {
            amount: None,
            taxable_amount: Some(self.taxable_amount),
            gst_rate: self.gst_rate,
            gst_type: Some(self.gst_type),
            igst_amount: self.igst_amount,
            cgst_amount: self.cgst_amount,
            sgst_amount: self.sgst_amount,
            vat_amount: self.vat_amount,
        }
    }

    /// Convert into the GST detail block stored on a journal entry
    pub fn into_details(self, is_inter_state: Option<bool>) -> GstDetails {
        GstDetails {
            gst_type: Some(self.gst_type),
            gst_rate: self.gst_rate,
            taxable_amount: Some(self.taxable_amount),
            igst_amount: self.igst_amount,
            cgst_amount: self.cgst_amount,
            sgst_amount: self.sgst_amount,
            vat_amount: self.vat_amount,
            is_inter_state,
        }
    }
}

/// Split a tax amount into its jurisdiction components.
///
/// Taxable amount resolution: kept when supplied; otherwise backed out of
/// the tax-inclusive total as `amount / (1 + rate/100)` rounded to two
/// decimals; with no rate (or no tax type) the total itself is the taxable
/// amount. A CGST/SGST pair is only computed when neither half was supplied;
/// each half is rounded independently, which can drift a cent from the
/// undivided total.
pub fn split_tax(input: TaxSplitInput) -> TaxSplitResult {
    let gst_type = input.gst_type.unwrap_or(GstType::None);
    let rate = input.gst_rate;

    let taxable_amount = match input.taxable_amount {
        Some(taxable) => taxable,
        None => match (&input.amount, &rate) {
            (Some(total), Some(r)) if gst_type != GstType::None => {
                round2(&((total * BigDecimal::from(100)) / (BigDecimal::from(100) + r)))
            }
            (Some(total), _) => total.clone(),
            (None, _) => BigDecimal::from(0),
        },
    };

    let mut igst_amount = input.igst_amount;
    let mut cgst_amount = input.cgst_amount;
    let mut sgst_amount = input.sgst_amount;
    let mut vat_amount = input.vat_amount;

    match (gst_type, &rate) {
        (GstType::CgstSgst, Some(r)) => {
            if cgst_amount.is_none() && sgst_amount.is_none() {
                let half = round2(&((&taxable_amount * r) / BigDecimal::from(200)));
                cgst_amount = Some(half.clone());
                sgst_amount = Some(half);
            }
        }
        (GstType::Igst, Some(r)) => {
            if igst_amount.is_none() {
                igst_amount = Some(round2(&((&taxable_amount * r) / BigDecimal::from(100))));
            }
        }
        (GstType::Vat, Some(r)) => {
            if vat_amount.is_none() {
                vat_amount = Some(round2(&((&taxable_amount * r) / BigDecimal::from(100))));
            }
        }
        _ => {}
    }

    let total_tax = round2(
        &[&igst_amount, &cgst_amount, &sgst_amount, &vat_amount]
            .iter()
            .filter_map(|component| component.as_ref())
            .sum::<BigDecimal>(),
    );

    TaxSplitResult {
        gst_type,
        gst_rate: rate,
        taxable_amount: round2(&taxable_amount),
        igst_amount,
        cgst_amount,
        sgst_amount,
        vat_amount,
        total_tax,
    }
}

//! GST split and invoice totals walkthrough

use bigdecimal::BigDecimal;
use bookkeeping_core::{
    compute_invoice_totals, normalize_invoice, split_tax, GstType, InvoiceDraft, LineItem,
    TaxSplitInput,
};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal literal")
}

fn main() {
    println!("🧮 Bookkeeping Core - GST Split Example\n");

    // Intra-state sale: the tax splits evenly into CGST and SGST
    println!("📍 Intra-state sale (₹1,000 @ 18%)");
    let intra = split_tax(TaxSplitInput {
        taxable_amount: Some(dec("1000")),
        gst_rate: Some(dec("18")),
        gst_type: Some(GstType::CgstSgst),
        ..Default::default()
    });
    println!("  taxable: {}", intra.taxable_amount);
    println!("  CGST:    {:?}", intra.cgst_amount);
    println!("  SGST:    {:?}", intra.sgst_amount);
    println!("  total:   {}\n", intra.total_tax);

    // Inter-state sale: the full tax is IGST
    println!("🗺  Inter-state sale (₹1,000 @ 18%)");
    let inter = split_tax(TaxSplitInput {
        taxable_amount: Some(dec("1000")),
        gst_rate: Some(dec("18")),
        gst_type: Some(GstType::Igst),
        ..Default::default()
    });
    println!("  IGST:    {:?}", inter.igst_amount);
    println!("  total:   {}\n", inter.total_tax);

    // Tax-inclusive total: the taxable amount is backed out first
    println!("🔁 Backing out of a tax-inclusive total (₹1,180 @ 18%)");
    let backed_out = split_tax(TaxSplitInput {
        amount: Some(dec("1180")),
        gst_rate: Some(dec("18")),
        gst_type: Some(GstType::CgstSgst),
        ..Default::default()
    });
    println!("  taxable: {}", backed_out.taxable_amount);
    println!("  CGST:    {:?}", backed_out.cgst_amount);
    println!("  SGST:    {:?}\n", backed_out.sgst_amount);

    // Invoice totals from line items
    println!("🧾 Invoice totals");
    let items = vec![
        LineItem {
            description: "Consulting hours".to_string(),
            quantity: dec("10"),
            unit_price: dec("50"),
            amount: None,
            hsn_sac_code: Some("9983".to_string()),
            gst_rate: Some(dec("18")),
        },
        LineItem {
            description: "Reimbursed travel".to_string(),
            quantity: dec("1"),
            unit_price: dec("240"),
            amount: None,
            hsn_sac_code: None,
            gst_rate: None,
        },
    ];
    let totals = compute_invoice_totals(&items);
    println!("  subtotal: {}", totals.sub_total);
    println!("  GST:      {}", totals.total_gst_amount);
    println!("  total:    {}\n", totals.total_amount);

    // Draft normalization: defaults and strict dates
    println!("📄 Draft normalization");
    let invoice = normalize_invoice(InvoiceDraft {
        invoice_date: Some("not-a-date".to_string()),
        due_date: Some("2024-07-31".to_string()),
        line_items: items,
        ..Default::default()
    });
    println!("  number:  {} (generated)", invoice.invoice_number);
    println!("  date:    {} (defaulted to today)", invoice.invoice_date);
    println!("  due:     {:?}", invoice.due_date);
    println!("  total:   {}", invoice.total_amount);
}

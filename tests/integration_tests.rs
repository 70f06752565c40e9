//! Integration tests for bookkeeping-core

use bigdecimal::BigDecimal;
use bookkeeping_core::{
    build_balance_sheet, build_ledger_view, build_profit_and_loss, build_trial_balance,
    classify_account, compute_invoice_totals, normalize_invoice_as_of, split_tax,
    utils::MemoryStore, AccountClass, AccountClassifier, Books, DateRange, GstType, InvoiceDraft,
    JournalEntry, LedgerFilter, LineItem, TaxSplitInput,
};
use chrono::NaiveDate;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(id: &str, on: NaiveDate, desc: &str, debit: &str, credit: &str, amount: i64) -> JournalEntry {
    JournalEntry::new(
        id.to_string(),
        on,
        desc.to_string(),
        debit.to_string(),
        credit.to_string(),
        BigDecimal::from(amount),
    )
}

/// A quarter of small-business activity, derived end to end
fn sample_books() -> Vec<JournalEntry> {
    vec![
        entry("1", date(2024, 1, 1), "Owner investment", "Cash", "Owner's Capital", 50000),
        entry("2", date(2024, 1, 10), "Stock purchase", "Inventory", "Accounts Payable", 12000),
        entry("3", date(2024, 1, 20), "Cash sale", "Cash", "Sales Revenue", 8000),
        entry("4", date(2024, 2, 1), "January rent", "Rent", "Cash", 1500),
        entry("5", date(2024, 2, 14), "Consulting engagement", "Cash", "Service Income", 5000),
        entry("6", date(2024, 2, 28), "Salaries", "Salaries", "Cash", 3000),
        entry("7", date(2024, 3, 5), "Owner withdrawal", "Owner's Draw", "Cash", 2000),
        entry("8", date(2024, 3, 15), "Supplier payment", "Accounts Payable", "Cash", 7000),
    ]
}

#[test]
fn trial_balance_always_balances() {
    let tb = build_trial_balance(&sample_books());
    assert!(tb.is_balanced);
    assert_eq!(tb.total_debits, tb.total_credits);
    assert_eq!(tb.discrepancy, dec("0.00"));

    // sorted by account name
    let names: Vec<&str> = tb.rows.iter().map(|r| r.account_name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn balance_sheet_identity_holds() {
    let report = build_balance_sheet(&sample_books(), &AccountClassifier::new());

    // assets: Cash 49500, Inventory 12000
    assert_eq!(report.total_assets, dec("61500.00"));
    // liabilities: remaining payable 5000
    assert_eq!(report.total_liabilities, dec("5000.00"));
    // equity: 50000 + (13000 - 4500) - 2000
    assert_eq!(report.equity.total_beginning_equity, dec("50000.00"));
    assert_eq!(report.equity.net_income, dec("8500.00"));
    assert_eq!(report.equity.total_drawings, dec("2000.00"));
    assert_eq!(report.equity.ending_equity, dec("56500.00"));

    assert!(report.is_balanced);
    assert_eq!(report.discrepancy, dec("0.00"));
}

#[test]
fn profit_and_loss_for_february() {
    let report = build_profit_and_loss(
        &sample_books(),
        DateRange::new(date(2024, 2, 1), date(2024, 2, 29)),
        &AccountClassifier::new(),
    );

    assert_eq!(report.total_revenue, dec("5000.00"));
    assert_eq!(report.total_expenses, dec("4500.00"));
    assert_eq!(report.net_profit, dec("500.00"));
    assert_eq!(report.expenses[0].name, "Salaries");
}

#[test]
fn ledger_view_running_balance_example() {
    let entries = vec![
        entry("1", date(2024, 1, 1), "Sale", "Cash", "Revenue", 100),
        entry("2", date(2024, 1, 5), "Rent", "Rent", "Cash", 40),
    ];

    let view = build_ledger_view(
        &entries,
        "Cash",
        &LedgerFilter::default(),
        &AccountClassifier::new(),
    );

    assert_eq!(view.len(), 2);
    assert_eq!(view[0].debit, Some(dec("100.00")));
    assert_eq!(view[0].credit, None);
    assert_eq!(view[0].balance, dec("100.00"));
    assert_eq!(view[1].debit, None);
    assert_eq!(view[1].credit, Some(dec("40.00")));
    assert_eq!(view[1].balance, dec("60.00"));
}

#[test]
fn classifier_is_deterministic_across_calls() {
    for _ in 0..50 {
        assert_eq!(classify_account("Accounts Payable"), AccountClass::Liability);
        assert_eq!(classify_account("Owner's Draw"), AccountClass::Drawing);
    }
}

#[test]
fn tax_split_round_trips_idempotently() {
    let first = split_tax(TaxSplitInput {
        amount: Some(dec("1180")),
        gst_rate: Some(dec("18")),
        gst_type: Some(GstType::CgstSgst),
        ..Default::default()
    });

    assert_eq!(first.taxable_amount, dec("1000.00"));
    assert_eq!(first.cgst_amount, Some(dec("90.00")));
    assert_eq!(first.sgst_amount, Some(dec("90.00")));

    let second = split_tax(first.clone().into_input());
    assert_eq!(first, second);
}

#[test]
fn invoice_totals_round_trip() {
    let items = vec![LineItem {
        description: "Widget".to_string(),
        quantity: dec("10"),
        unit_price: dec("50"),
        amount: None,
        hsn_sac_code: None,
        gst_rate: Some(dec("18")),
    }];

    let totals = compute_invoice_totals(&items);
    assert_eq!(totals.sub_total, dec("500.00"));
    assert_eq!(totals.total_gst_amount, dec("90.00"));
    assert_eq!(totals.total_amount, dec("590.00"));
}

#[test]
fn every_builder_tolerates_an_empty_snapshot() {
    let classifier = AccountClassifier::new();

    let tb = build_trial_balance(&[]);
    assert!(tb.is_balanced);
    assert_eq!(tb.total_debits, dec("0.00"));

    let bs = build_balance_sheet(&[], &classifier);
    assert!(bs.is_balanced);
    assert_eq!(bs.total_assets, dec("0.00"));

    let pl = build_profit_and_loss(
        &[],
        DateRange::new(date(2024, 1, 1), date(2024, 12, 31)),
        &classifier,
    );
    assert_eq!(pl.net_profit, dec("0.00"));

    let view = build_ledger_view(&[], "Cash", &LedgerFilter::default(), &classifier);
    assert!(view.is_empty());
}

#[tokio::test]
async fn full_workflow_through_the_facade() {
    let store = MemoryStore::new();
    for entry in sample_books() {
        store.insert_entry("acme", entry);
    }

    // another tenant's books stay invisible
    store.insert_entry(
        "globex",
        entry("g1", date(2024, 1, 1), "Noise", "Cash", "Sales Revenue", 999),
    );

    let books = Books::new(store);

    let tb = books.trial_balance("acme").await.unwrap();
    assert!(tb.is_balanced);

    let bs = books.balance_sheet("acme").await.unwrap();
    assert_eq!(bs.total_assets, dec("61500.00"));

    let pl = books
        .profit_and_loss("acme", DateRange::new(date(2024, 1, 1), date(2024, 3, 31)))
        .await
        .unwrap();
    assert_eq!(pl.total_revenue, dec("13000.00"));
    assert_eq!(pl.net_profit, dec("8500.00"));

    let cash = books
        .ledger_view("acme", "Cash", &LedgerFilter::default())
        .await
        .unwrap();
    assert_eq!(cash.last().unwrap().balance, dec("49500.00"));

    let integrity = books.check_integrity("acme").await.unwrap();
    assert!(integrity.is_valid);
}

#[tokio::test]
async fn invoice_flow_through_store_and_facade() {
    let draft = InvoiceDraft {
        invoice_date: Some("2024-03-01".to_string()),
        due_date: Some("2024-03-31".to_string()),
        line_items: vec![
            LineItem {
                description: "Consulting".to_string(),
                quantity: dec("8"),
                unit_price: dec("125"),
                amount: None,
                hsn_sac_code: Some("9983".to_string()),
                gst_rate: Some(dec("18")),
            },
            LineItem {
                description: "Travel".to_string(),
                quantity: dec("1"),
                unit_price: dec("240"),
                amount: None,
                hsn_sac_code: None,
                gst_rate: None,
            },
        ],
        ..Default::default()
    };

    let invoice = normalize_invoice_as_of(draft, date(2024, 3, 1));
    assert_eq!(invoice.sub_total, dec("1240.00"));
    assert_eq!(invoice.total_gst_amount, dec("180.00"));
    assert_eq!(invoice.total_amount, dec("1420.00"));

    let store = MemoryStore::new();
    let invoice_id = invoice.id.clone();
    store.insert_invoice("acme", invoice);

    let books = Books::new(store);
    let totals = books.invoice_totals("acme", &invoice_id).await.unwrap();
    assert_eq!(totals.total_amount, dec("1420.00"));
}

#[tokio::test]
async fn chart_seeded_classifier_flows_through_reports() {
    let store = MemoryStore::new();
    store.insert_entry(
        "acme",
        entry("1", date(2024, 1, 1), "Investment", "Cash", "Owner's Capital", 1000),
    );
    store.insert_entry(
        "acme",
        entry("2", date(2024, 1, 5), "Tenant deposit held", "Cash", "Tenant Deposits Held", 300),
    );

    let mut classifier = AccountClassifier::new();
    classifier.register("Tenant Deposits Held", AccountClass::Liability);

    let books = Books::with_classifier(store, classifier);
    let bs = books.balance_sheet("acme").await.unwrap();

    assert_eq!(bs.total_liabilities, dec("300.00"));
    assert!(bs.is_balanced);
}

#[test]
fn reports_serialize_for_transport() {
    let report = build_balance_sheet(&sample_books(), &AccountClassifier::new());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"total_assets\""));

    let tb = build_trial_balance(&sample_books());
    let json = serde_json::to_string(&tb).unwrap();
    assert!(json.contains("\"total_debits\""));
}

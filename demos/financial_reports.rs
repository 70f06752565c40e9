//! Financial reports walkthrough

use bigdecimal::BigDecimal;
use bookkeeping_core::utils::MemoryStore;
use bookkeeping_core::{Books, DateRange, JournalEntry, LedgerFilter};
use chrono::NaiveDate;

fn entry(id: &str, date: NaiveDate, desc: &str, debit: &str, credit: &str, amount: i64) -> JournalEntry {
    JournalEntry::new(
        id.to_string(),
        date,
        desc.to_string(),
        debit.to_string(),
        credit.to_string(),
        BigDecimal::from(amount),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Bookkeeping Core - Financial Reports Example\n");

    let store = MemoryStore::new();
    let company = "demo-co";

    println!("💰 Recording Business Transactions...\n");
    let activity = vec![
        entry(
            "txn001",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Initial owner investment",
            "Cash",
            "Owner's Capital",
            50000,
        ),
        entry(
            "txn002",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Purchase of office equipment",
            "Equipment",
            "Cash",
            15000,
        ),
        entry(
            "txn003",
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            "First month of consulting",
            "Cash",
            "Service Income",
            12000,
        ),
        entry(
            "txn004",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            "Office rent for January",
            "Rent",
            "Cash",
            2500,
        ),
        entry(
            "txn005",
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            "Owner withdrawal",
            "Owner's Draw",
            "Cash",
            3000,
        ),
    ];

    for txn in activity {
        println!("  ✓ {} — {}", txn.date, txn.description);
        store.insert_entry(company, txn);
    }

    let books = Books::new(store);

    println!("\n📊 Trial Balance");
    let tb = books.trial_balance(company).await?;
    for row in &tb.rows {
        println!(
            "  {:<20} debit {:>10}  credit {:>10}",
            row.account_name, row.debit, row.credit
        );
    }
    println!(
        "  totals: {} / {} (balanced: {})",
        tb.total_debits, tb.total_credits, tb.is_balanced
    );

    println!("\n🏦 Balance Sheet");
    let bs = books.balance_sheet(company).await?;
    for asset in &bs.assets {
        println!("  asset     {:<20} {:>10}", asset.name, asset.balance);
    }
    for liability in &bs.liabilities {
        println!("  liability {:<20} {:>10}", liability.name, liability.balance);
    }
    println!("  net income:     {}", bs.equity.net_income);
    println!("  ending equity:  {}", bs.equity.ending_equity);
    println!(
        "  assets {} = liabilities {} + equity {} (balanced: {})",
        bs.total_assets, bs.total_liabilities, bs.equity.ending_equity, bs.is_balanced
    );

    println!("\n📈 Profit & Loss (January)");
    let pl = books
        .profit_and_loss(
            company,
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ),
        )
        .await?;
    println!("  revenue:  {}", pl.total_revenue);
    println!("  expenses: {}", pl.total_expenses);
    println!("  profit:   {}", pl.net_profit);

    println!("\n📒 Cash Ledger");
    let cash = books
        .ledger_view(company, "Cash", &LedgerFilter::default())
        .await?;
    for row in &cash {
        println!(
            "  {} {:<30} balance {:>10}",
            row.date, row.description, row.balance
        );
    }

    println!("\n🔍 Integrity Check");
    let integrity = books.check_integrity(company).await?;
    println!("  valid: {}", integrity.is_valid);
    for issue in &integrity.issues {
        println!("  ⚠ {issue}");
    }

    Ok(())
}

//! Validation utilities
//!
//! Free-function validators shared by the report builders and the invoice
//! calculator, so every builder applies the same skip-the-bad-record
//! predicate.

use crate::types::*;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// Parse a calendar date in strict `YYYY-MM-DD` form. Anything else is
/// rejected; dates are never coerced to an arbitrary epoch.
pub fn parse_strict_date(input: &str) -> BooksResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BooksError::InvalidDate(input.to_string()))
}

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> BooksResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(BooksError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an account name is usable
pub fn validate_account_name(name: &str) -> BooksResult<()> {
    if name.trim().is_empty() {
        return Err(BooksError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(BooksError::Validation(
            "Account name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate an invoice line item: quantity at least 0.01, non-negative unit
/// price, GST rate (when given) within [0, 100].
pub fn validate_line_item(item: &LineItem) -> BooksResult<()> {
    let min_quantity = BigDecimal::from(1) / BigDecimal::from(100);
    if item.quantity < min_quantity {
        return Err(BooksError::Validation(format!(
            "line item '{}' quantity must be at least 0.01",
            item.description
        )));
    }

    if item.unit_price < BigDecimal::from(0) {
        return Err(BooksError::Validation(format!(
            "line item '{}' unit price cannot be negative",
            item.description
        )));
    }

    if let Some(rate) = &item.gst_rate {
        if *rate < BigDecimal::from(0) || *rate > BigDecimal::from(100) {
            return Err(BooksError::Validation(format!(
                "line item '{}' GST rate must be between 0 and 100",
                item.description
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(quantity: &str, unit_price: &str, gst_rate: Option<&str>) -> LineItem {
        LineItem {
            description: "Widget".to_string(),
            quantity: BigDecimal::from_str(quantity).unwrap(),
            unit_price: BigDecimal::from_str(unit_price).unwrap(),
            amount: None,
            hsn_sac_code: None,
            gst_rate: gst_rate.map(|r| BigDecimal::from_str(r).unwrap()),
        }
    }

    #[test]
    fn strict_date_parsing() {
        assert_eq!(
            parse_strict_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(parse_strict_date("15/03/2024").is_err());
        assert!(parse_strict_date("2024-13-01").is_err());
        assert!(parse_strict_date("yesterday").is_err());
        assert!(parse_strict_date("").is_err());
    }

    #[test]
    fn line_item_bounds() {
        assert!(validate_line_item(&item("1", "50", Some("18"))).is_ok());
        assert!(validate_line_item(&item("0.01", "0", None)).is_ok());
        assert!(validate_line_item(&item("0.001", "50", None)).is_err());
        assert!(validate_line_item(&item("1", "-1", None)).is_err());
        assert!(validate_line_item(&item("1", "50", Some("101"))).is_err());
        assert!(validate_line_item(&item("1", "50", Some("-1"))).is_err());
    }

    #[test]
    fn account_name_bounds() {
        assert!(validate_account_name("Cash").is_ok());
        assert!(validate_account_name("").is_err());
        assert!(validate_account_name(&"x".repeat(101)).is_err());
    }
}

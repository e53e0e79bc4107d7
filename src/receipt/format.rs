//! Formatting helpers used when rendering receipts.

use chrono::{Days, NaiveDate};

/// Days between the day a receipt is printed and its due date.
pub const PAYMENT_TERM_DAYS: u64 = 14;

/// Formats a dollar amount with exactly two decimals, e.g. `"$299.99"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Formats cabinet dimensions in inches as `H"H x W"W x D"D`.
///
/// Whole numbers print without a fraction (`30`), others as-is (`30.5`).
#[must_use]
pub fn format_dimensions(height: f64, width: f64, depth: f64) -> String {
    format!("{height}\"H x {width}\"W x {depth}\"D")
}

/// Formats a date as `M/D/YYYY` without zero padding.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Date payment is due for a receipt printed on `today`.
#[must_use]
pub fn due_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(PAYMENT_TERM_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// First eight characters of an identifier, used as a human-friendly reference.
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Escapes text for element content. Quotes are left alone so dimension marks
/// like `30"H` print as written.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for a quoted attribute value.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

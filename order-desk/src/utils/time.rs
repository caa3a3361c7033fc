//! Date helpers for order dates entered in the forms

use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

/// Formats accepted by the date pickers and search boxes
const ORDER_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Parse an order date (`YYYY/MM/DD` or `YYYY-MM-DD`)
pub fn parse_order_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    ORDER_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            AppError::validation(format!("Invalid date format: {}", raw)).with_detail("value", raw)
        })
}

/// Display format used on screens and printed order forms
pub fn format_order_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Today in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

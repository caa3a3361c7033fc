//! Input validation helpers
//!
//! Text length limits for the order forms and the checks shared by form
//! validation. Lengths are counted in characters, not bytes, since most
//! input is Japanese.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Supplier / customer / product names
pub const MAX_NAME_LEN: usize = 100;

/// Memo and remarks fields
pub const MAX_MEMO_LEN: usize = 200;

/// Codes: supplier, maker, product
pub const MAX_CODE_LEN: usize = 20;

/// Largest order quantity accepted by the entry forms
pub const MAX_ORDER_QTY: i64 = 99_999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string is at most `max_len` characters long.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a string consists of ASCII digits only (staff code, order form number).
pub fn validate_digits(value: &str, field: &str) -> AppResult<()> {
    let v = value.trim();
    if v.is_empty() || !v.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(format!("{field} must be numeric")).with_detail("field", field));
    }
    Ok(())
}

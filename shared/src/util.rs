use rust_decimal::prelude::*;

/// Left-pad `value` with `'0'` up to `width` characters.
///
/// Values already at or beyond `width` are returned unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len >= width {
        return trimmed.to_string();
    }
    let mut padded = "0".repeat(width - len);
    padded.push_str(trimmed);
    padded
}

/// Parse a user-entered amount or quantity, falling back to 0.
///
/// Thousands separators (`,` and the full-width `，`), `¥` and surrounding
/// whitespace are ignored. Only the leading number is read, so trailing unit
/// text is dropped (`"1台"` is 1). Fractional parts are truncated; input with
/// no leading digit (including negatives) becomes 0.
pub fn parse_or_zero(raw: &str) -> i64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '，' && *c != '¥')
        .collect();
    let number = leading_number(&cleaned);
    if number.is_empty() {
        return 0;
    }

    Decimal::from_str(number)
        .ok()
        .and_then(|d| d.trunc().to_i64())
        .unwrap_or(0)
}

/// Longest prefix of the form `[+]digits[.digits]`, without the sign
fn leading_number(s: &str) -> &str {
    let body = s.strip_prefix('+').unwrap_or(s);
    let int_len = body.bytes().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return "";
    }

    let frac_len = body[int_len..]
        .strip_prefix('.')
        .map(|rest| rest.bytes().take_while(|b| b.is_ascii_digit()).count())
        .filter(|n| *n > 0)
        .map_or(0, |n| n + 1);
    &body[..int_len + frac_len]
}

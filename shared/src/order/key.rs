//! Order key - groups line items into one order

use crate::util::zero_pad;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the staff code part of an order key
pub const STAFF_CODE_WIDTH: usize = 3;
/// Width of the order form number part of an order key
pub const ORDER_FORM_NO_WIDTH: usize = 6;

/// Derived order identifier: `<staff code:3>-<order form no:6>`, e.g. `001-000001`
///
/// Not unique per line: every line sharing the key belongs to the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// Build a key from raw staff code and order form number, zero-padding both
    pub fn new(staff_code: &str, order_form_no: &str) -> Self {
        Self(format!(
            "{}-{}",
            zero_pad(staff_code, STAFF_CODE_WIDTH),
            zero_pad(order_form_no, ORDER_FORM_NO_WIDTH)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

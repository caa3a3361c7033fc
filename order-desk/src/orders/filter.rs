//! Header search
//!
//! Every present criterion narrows the result (logical AND); absent or blank
//! criteria impose nothing. Criteria the header does not carry itself
//! (order form no, maker code, staff code) match when any of its lines does.

use super::deleted::DeletedOrders;
use crate::utils::time::parse_order_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::order::{DirectDeliveryFilter, OrderHeader, OrderMethod, key::STAFF_CODE_WIDTH};
use shared::util::zero_pad;

/// Inclusive order-date range; either bound may be open
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Parse bounds as entered in the date pickers
    ///
    /// An unparseable bound is dropped (no constraint) rather than rejected.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(Self::parse_bound),
            end: end.and_then(Self::parse_bound),
        }
    }

    fn parse_bound(raw: &str) -> Option<NaiveDate> {
        if raw.trim().is_empty() {
            return None;
        }
        match parse_order_date(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::warn!("Ignoring date criterion '{}': {}", raw, e);
                None
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Search form criteria; every field is optional
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SearchCriteria {
    /// Matches the supplier code exactly, or a substring of the supplier name
    pub supplier_code: Option<String>,
    pub supplier_name: Option<String>,
    /// Substring of the order key
    pub order_number: Option<String>,
    pub order_form_no: Option<String>,
    pub maker_code: Option<String>,
    /// Compared after zero-padding to 3 digits
    pub staff_code: Option<String>,
    pub order_method: Option<OrderMethod>,
    pub date_range: Option<DateRange>,
    pub direct_delivery: Option<DirectDeliveryFilter>,
    pub show_deleted_orders: bool,
}

impl SearchCriteria {
    /// Whether a header satisfies every present criterion (deletion aside)
    pub fn matches(&self, header: &OrderHeader) -> bool {
        if let Some(code) = present(&self.supplier_code) {
            let exact = header.supplier_code.eq_ignore_ascii_case(code);
            if !exact && !contains_ci(&header.supplier_name, code) {
                return false;
            }
        }

        if let Some(name) = present(&self.supplier_name) {
            if !contains_ci(&header.supplier_name, name) {
                return false;
            }
        }

        if let Some(number) = present(&self.order_number) {
            if !contains_ci(header.order_key.as_str(), number) {
                return false;
            }
        }

        if let Some(form_no) = present(&self.order_form_no) {
            if !header.any_line(|l| contains_ci(&l.order_form_no, form_no)) {
                return false;
            }
        }

        if let Some(maker) = present(&self.maker_code) {
            if !header.any_line(|l| contains_ci(&l.maker_code, maker)) {
                return false;
            }
        }

        if let Some(staff) = present(&self.staff_code) {
            let wanted = zero_pad(staff, STAFF_CODE_WIDTH);
            if !header.any_line(|l| zero_pad(&l.staff_code, STAFF_CODE_WIDTH) == wanted) {
                return false;
            }
        }

        if let Some(method) = self.order_method {
            if header.order_classification != method {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            if !range.contains(header.order_date) {
                return false;
            }
        }

        if let Some(delivery) = self.direct_delivery {
            if !delivery.accepts(header.direct_delivery) {
                return false;
            }
        }

        true
    }
}

/// Filter headers with no deleted-order tracking
pub fn filter(headers: &[OrderHeader], criteria: &SearchCriteria) -> Vec<OrderHeader> {
    filter_headers(headers, criteria, &DeletedOrders::default())
}

/// Filter headers, hiding deleted orders unless `show_deleted_orders` is set
///
/// Returns a new list in input order; the input is never touched.
pub fn filter_headers(
    headers: &[OrderHeader],
    criteria: &SearchCriteria,
    deleted: &DeletedOrders,
) -> Vec<OrderHeader> {
    let result: Vec<OrderHeader> = headers
        .iter()
        .filter(|h| criteria.show_deleted_orders || !deleted.contains(&h.order_key))
        .filter(|h| criteria.matches(h))
        .cloned()
        .collect();

    tracing::debug!(
        matched = result.len(),
        total = headers.len(),
        "Filtered order headers"
    );

    result
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

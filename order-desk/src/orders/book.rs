//! Order book - owner of the flat line-item collection
//!
//! Every read (headers, search, detail rows) is a fresh projection of the
//! current lines. Mutations address lines by order key and 1-based line number
//! within that order.

use super::aggregator::aggregate_with;
use super::deleted::DeletedOrders;
use super::filter::{SearchCriteria, filter_headers};
use super::rowspan::{RowRender, RowSpanPlan, compute_row_spans, expand_rows};
use crate::pricing::TaxCalculator;
use crate::provider::OrderDataProvider;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::order::{DirectDeliveryClass, LineItem, OrderHeader, OrderKey};
use shared::util::parse_or_zero;

/// Partial update of a line as submitted by the detail edit form
///
/// Staff code and order form number are not editable: changing them would
/// move the line to another order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LineChanges {
    pub memo: Option<String>,
    pub end_user_name: Option<String>,
    pub maker_code: Option<String>,
    pub product_name: Option<String>,
    pub specification: Option<String>,
    /// Raw text, parsed leniently
    pub order_qty: Option<String>,
    /// Raw text, parsed leniently
    pub unit_price: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub direct_delivery: Option<DirectDeliveryClass>,
}

impl LineChanges {
    fn apply(self, line: &mut LineItem) {
        if let Some(memo) = self.memo {
            line.memo = memo;
        }
        if let Some(name) = self.end_user_name {
            line.end_user_name = name;
        }
        if let Some(code) = self.maker_code {
            line.maker_code = code;
        }
        if let Some(name) = self.product_name {
            line.product_name = name;
        }
        if let Some(spec) = self.specification {
            line.specification = spec;
        }
        if let Some(qty) = self.order_qty {
            line.order_qty = parse_or_zero(&qty);
        }
        if let Some(price) = self.unit_price {
            line.unit_price = parse_or_zero(&price);
        }
        if let Some(date) = self.order_date {
            line.order_date = date;
        }
        if let Some(class) = self.direct_delivery {
            line.direct_delivery = class;
        }
    }
}

/// Lines of one order with their rendering plan
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailRows {
    pub header: OrderHeader,
    pub plans: Vec<RowSpanPlan>,
    pub rows: Vec<RowRender>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    lines: Vec<LineItem>,
    calculator: TaxCalculator,
}

impl OrderBook {
    pub fn new(lines: Vec<LineItem>, calculator: TaxCalculator) -> Self {
        Self { lines, calculator }
    }

    /// Load every line the provider serves
    pub fn from_provider<P: OrderDataProvider + ?Sized>(
        provider: &P,
        calculator: TaxCalculator,
    ) -> Self {
        let lines = provider.line_items();
        tracing::info!(lines = lines.len(), "Order book loaded");
        Self::new(lines, calculator)
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    pub fn headers(&self) -> Vec<OrderHeader> {
        aggregate_with(&self.lines, &self.calculator)
    }

    pub fn header(&self, key: &OrderKey) -> AppResult<OrderHeader> {
        self.headers()
            .into_iter()
            .find(|h| h.order_key == *key)
            .ok_or_else(|| AppError::order_not_found(key.as_str()))
    }

    pub fn search(&self, criteria: &SearchCriteria, deleted: &DeletedOrders) -> Vec<OrderHeader> {
        filter_headers(&self.headers(), criteria, deleted)
    }

    /// Append a line; returns the key of the order it joined (or opened)
    pub fn add_line(&mut self, line: LineItem) -> OrderKey {
        let key = line.order_key();
        self.lines.push(line);
        tracing::info!(order_key = %key, "Line added");
        key
    }

    pub fn update_line(
        &mut self,
        key: &OrderKey,
        line_no: usize,
        changes: LineChanges,
    ) -> AppResult<&LineItem> {
        let pos = self.position(key, line_no)?;
        let line = &mut self.lines[pos];
        changes.apply(line);
        tracing::info!(order_key = %key, line_no, "Line updated");
        Ok(line)
    }

    /// Remove one line; the order disappears with its last line
    pub fn delete_line(&mut self, key: &OrderKey, line_no: usize) -> AppResult<LineItem> {
        let pos = self.position(key, line_no)?;
        let removed = self.lines.remove(pos);
        tracing::info!(order_key = %key, line_no, "Line deleted");
        Ok(removed)
    }

    /// Remove every line of an order; returns how many were removed
    pub fn delete_order(&mut self, key: &OrderKey) -> AppResult<usize> {
        let before = self.lines.len();
        self.lines.retain(|l| l.order_key() != *key);
        let removed = before - self.lines.len();
        if removed == 0 {
            return Err(AppError::order_not_found(key.as_str()));
        }
        tracing::info!(order_key = %key, removed, "Order deleted");
        Ok(removed)
    }

    pub fn detail_rows(&self, key: &OrderKey) -> AppResult<DetailRows> {
        let header = self.header(key)?;
        let plans = compute_row_spans(&header.lines);
        let rows = expand_rows(&plans);
        Ok(DetailRows {
            header,
            plans,
            rows,
        })
    }

    /// Index into `lines` of the `line_no`-th (1-based) line of `key`
    fn position(&self, key: &OrderKey, line_no: usize) -> AppResult<usize> {
        let mut in_order = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.order_key() == *key)
            .map(|(i, _)| i)
            .peekable();

        if in_order.peek().is_none() {
            return Err(AppError::order_not_found(key.as_str()));
        }

        line_no
            .checked_sub(1)
            .and_then(|n| in_order.nth(n))
            .ok_or_else(|| AppError::line_not_found(key.as_str(), line_no))
    }
}

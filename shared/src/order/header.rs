//! Order header - aggregated projection over the lines sharing an order key

use super::key::OrderKey;
use super::line_item::LineItem;
use super::types::{DirectDeliveryClass, OrderMethod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Monetary totals of one order, in yen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderTotals {
    /// 発注金額(税抜)
    pub amount_excluding_tax: i64,
    /// 消費税額
    pub tax_amount: i64,
    /// 発注金額(税込)
    pub amount_including_tax: i64,
}

impl OrderTotals {
    pub fn new(amount_excluding_tax: i64, tax_amount: i64) -> Self {
        Self {
            amount_excluding_tax,
            tax_amount,
            amount_including_tax: amount_excluding_tax.saturating_add(tax_amount),
        }
    }
}

/// Aggregated order record. Derived from line items, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderHeader {
    pub order_key: OrderKey,
    pub order_date: NaiveDate,
    pub supplier_code: String,
    pub supplier_name: String,
    #[serde(flatten)]
    pub totals: OrderTotals,
    pub order_classification: OrderMethod,
    pub direct_delivery: DirectDeliveryClass,
    /// Lines in their original relative order
    pub lines: Vec<LineItem>,
}

impl OrderHeader {
    /// Open a header from the first line seen for its key; totals start at zero
    pub fn open(first: &LineItem) -> Self {
        Self {
            order_key: first.order_key(),
            order_date: first.order_date,
            supplier_code: first.supplier_code.clone(),
            supplier_name: first.supplier_name.clone(),
            totals: OrderTotals::default(),
            order_classification: first.order_method,
            direct_delivery: first.direct_delivery,
            lines: Vec::new(),
        }
    }

    pub fn amount_excluding_tax(&self) -> i64 {
        self.totals.amount_excluding_tax
    }

    pub fn tax_amount(&self) -> i64 {
        self.totals.tax_amount
    }

    pub fn amount_including_tax(&self) -> i64 {
        self.totals.amount_including_tax
    }

    /// Whether any line satisfies the predicate
    pub fn any_line(&self, pred: impl Fn(&LineItem) -> bool) -> bool {
        self.lines.iter().any(pred)
    }
}

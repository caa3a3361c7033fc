//! Order line items

use super::key::OrderKey;
use super::types::{DirectDeliveryClass, OrderMethod};
use crate::models::{Customer, Product, Supplier};
use crate::util::parse_or_zero;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Line item as entered in the order forms - quantities and prices are raw text
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItemInput {
    #[serde(default)]
    pub supplier_code: String,
    pub supplier_name: String,
    #[serde(default)]
    pub order_method: OrderMethod,
    #[serde(default)]
    pub memo: String,
    pub staff_code: String,
    pub order_form_no: String,
    #[serde(default)]
    pub end_user_name: String,
    #[serde(default)]
    pub maker_code: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub specification: String,
    /// Quantity text, e.g. `"2"`
    #[serde(default)]
    pub order_qty: String,
    /// Unit price text, e.g. `"800,000"`
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub order_date: NaiveDate,
    #[serde(default)]
    pub direct_delivery: DirectDeliveryClass,
}

impl LineItemInput {
    /// Copy the supplier selected in the supplier search dialog
    pub fn apply_supplier(&mut self, supplier: &Supplier) {
        self.supplier_code = supplier.code.clone();
        self.supplier_name = supplier.name.clone();
        self.order_method = supplier.order_method;
    }

    /// Copy the product selected in the product search dialog
    pub fn apply_product(&mut self, product: &Product) {
        self.maker_code = product.maker_code.clone();
        self.product_name = product.name.clone();
        self.specification = product.specification.clone();
        self.unit_price = product.unit_price.to_string();
    }

    /// Copy the customer selected in the customer search dialog
    pub fn apply_customer(&mut self, customer: &Customer) {
        self.end_user_name = customer.name.clone();
    }
}

/// A single product/quantity/price entry belonging to one order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub supplier_code: String,
    pub supplier_name: String,
    pub order_method: OrderMethod,
    pub memo: String,
    /// 担当者コード (3 digits)
    pub staff_code: String,
    /// 発注書No (6 digits)
    pub order_form_no: String,
    pub end_user_name: String,
    pub maker_code: String,
    pub product_name: String,
    pub specification: String,
    pub order_qty: i64,
    /// Unit price in yen, no fractional sub-units
    pub unit_price: i64,
    pub order_date: NaiveDate,
    pub direct_delivery: DirectDeliveryClass,
}

/// Fields compared when deciding whether two adjacent lines render as one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessKey<'a> {
    pub end_user_name: &'a str,
    pub maker_code: &'a str,
    pub product_name: &'a str,
    pub order_qty: i64,
    pub unit_price: i64,
    pub memo: &'a str,
}

impl LineItem {
    /// Convert form input, coercing unparseable quantity/price to 0
    pub fn from_input(input: LineItemInput) -> Self {
        Self {
            order_qty: parse_or_zero(&input.order_qty),
            unit_price: parse_or_zero(&input.unit_price),
            supplier_code: input.supplier_code,
            supplier_name: input.supplier_name,
            order_method: input.order_method,
            memo: input.memo,
            staff_code: input.staff_code,
            order_form_no: input.order_form_no,
            end_user_name: input.end_user_name,
            maker_code: input.maker_code,
            product_name: input.product_name,
            specification: input.specification,
            order_date: input.order_date,
            direct_delivery: input.direct_delivery,
        }
    }

    /// Derived order key (`staff code-order form no`)
    pub fn order_key(&self) -> OrderKey {
        OrderKey::new(&self.staff_code, &self.order_form_no)
    }

    /// Line amount excluding tax (`qty × unit price`)
    pub fn amount(&self) -> i64 {
        self.order_qty.saturating_mul(self.unit_price)
    }

    pub fn business_key(&self) -> BusinessKey<'_> {
        BusinessKey {
            end_user_name: &self.end_user_name,
            maker_code: &self.maker_code,
            product_name: &self.product_name,
            order_qty: self.order_qty,
            unit_price: self.unit_price,
            memo: &self.memo,
        }
    }
}

impl From<LineItemInput> for LineItem {
    fn from(input: LineItemInput) -> Self {
        Self::from_input(input)
    }
}

//! Deleted-order tracker
//!
//! Orders marked here are hidden by search unless the caller asks to show
//! deleted orders. The line items themselves are left untouched.

use serde::{Deserialize, Serialize};
use shared::order::OrderKey;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedOrders {
    keys: HashSet<OrderKey>,
}

impl DeletedOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an order as deleted; returns false when it already was
    pub fn mark(&mut self, key: OrderKey) -> bool {
        let inserted = self.keys.insert(key);
        if inserted {
            tracing::info!(count = self.keys.len(), "Order marked deleted");
        }
        inserted
    }

    pub fn mark_all(&mut self, keys: impl IntoIterator<Item = OrderKey>) {
        self.keys.extend(keys);
        tracing::info!(count = self.keys.len(), "Orders marked deleted");
    }

    /// Undo a deletion; returns false when the order was not marked
    pub fn restore(&mut self, key: &OrderKey) -> bool {
        self.keys.remove(key)
    }

    pub fn contains(&self, key: &OrderKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

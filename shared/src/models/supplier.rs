//! Supplier Model

use super::CatalogRecord;
use crate::order::OrderMethod;
use serde::{Deserialize, Serialize};

/// Supplier entity (仕入先)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    /// 4-digit supplier code, e.g. `0001`
    pub code: String,
    pub name: String,
    /// Preferred order transmission method
    pub order_method: OrderMethod,
    pub phone: String,
    pub fax: String,
}

impl CatalogRecord for Supplier {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Customer Model

use super::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Customer entity (得意先) - the end user goods are ordered for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CatalogRecord for Customer {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

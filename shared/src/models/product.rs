//! Product Model

use super::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Product entity (商品)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub code: String,
    /// メーカー商品コード
    pub maker_code: String,
    pub name: String,
    /// 規格
    pub specification: String,
    /// 容量, e.g. `500g/瓶`
    pub capacity: String,
    /// Unit price excluding tax, in yen
    pub unit_price: i64,
}

impl CatalogRecord for Product {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.code.to_lowercase().contains(&q)
            || self.maker_code.to_lowercase().contains(&q)
            || self.name.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_matches_maker_code() {
        let product = Product {
            code: "P0001".to_string(),
            maker_code: "63-6334-36-30".to_string(),
            name: "分析天びん 320g".to_string(),
            specification: "ML304T/00".to_string(),
            capacity: "1台".to_string(),
            unit_price: 800_000,
        };
        assert!(product.matches_query("6334"));
        assert!(product.matches_query("p0001"));
        assert!(product.matches_query("天びん"));
        assert!(!product.matches_query("pH"));
    }
}

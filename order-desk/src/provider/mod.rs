//! Data provider
//!
//! Source of line items and master records. The order core only consumes
//! this trait, so it can run against the bundled sample data or any other
//! backing store.

mod mock;

pub use mock::MockDataProvider;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CatalogRecord, Customer, Product, Supplier};
use shared::order::LineItem;

pub trait OrderDataProvider {
    /// Every known line item, in entry order
    fn line_items(&self) -> Vec<LineItem>;

    fn suppliers(&self) -> Vec<Supplier>;

    fn products(&self) -> Vec<Product>;

    fn customers(&self) -> Vec<Customer>;

    /// Supplier search dialog: substring over code and name
    fn search_suppliers(&self, query: &str) -> Vec<Supplier> {
        search(self.suppliers(), query)
    }

    /// Product search dialog: substring over code, maker code and name
    fn search_products(&self, query: &str) -> Vec<Product> {
        search(self.products(), query)
    }

    /// Customer search dialog: substring over code and name
    fn search_customers(&self, query: &str) -> Vec<Customer> {
        search(self.customers(), query)
    }

    fn supplier(&self, code: &str) -> AppResult<Supplier> {
        find(self.suppliers(), code, ErrorCode::SupplierNotFound)
    }

    fn product(&self, code: &str) -> AppResult<Product> {
        find(self.products(), code, ErrorCode::ProductNotFound)
    }

    fn customer(&self, code: &str) -> AppResult<Customer> {
        find(self.customers(), code, ErrorCode::CustomerNotFound)
    }
}

fn search<T: CatalogRecord>(records: Vec<T>, query: &str) -> Vec<T> {
    records.into_iter().filter(|r| r.matches_query(query)).collect()
}

fn find<T: CatalogRecord>(records: Vec<T>, code: &str, not_found: ErrorCode) -> AppResult<T> {
    let code = code.trim();
    records
        .into_iter()
        .find(|r| r.code() == code)
        .ok_or_else(|| AppError::new(not_found).with_detail("code", code))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider with no data, to exercise the default methods alone
    struct Empty;

    impl OrderDataProvider for Empty {
        fn line_items(&self) -> Vec<LineItem> {
            Vec::new()
        }
        fn suppliers(&self) -> Vec<Supplier> {
            Vec::new()
        }
        fn products(&self) -> Vec<Product> {
            Vec::new()
        }
        fn customers(&self) -> Vec<Customer> {
            Vec::new()
        }
    }

    #[test]
    fn test_empty_provider() {
        assert!(Empty.search_suppliers("").is_empty());
        let err = Empty.product("P001").unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.detail("code"), Some(&serde_json::Value::from("P001")));
    }

    #[test]
    fn test_mock_search_dialogs() {
        let provider = MockDataProvider::new();

        let suppliers = provider.search_suppliers("和光");
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].code, "0002");

        let products = provider.search_products("6334");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "分析天びん 320g");

        assert_eq!(provider.search_customers("").len(), provider.customers().len());
    }

    #[test]
    fn test_find_by_code() {
        let provider = MockDataProvider::new();
        assert_eq!(provider.customer("0003").unwrap().name, "□□病院");

        let err = provider.supplier("9999").unwrap_err();
        assert_eq!(err.code, ErrorCode::SupplierNotFound);
    }
}

//! Master data models
//!
//! Records supplied by the supplier / product / customer search dialogs.
//! A selected record is copied into line item fields; nothing here is
//! validated or fetched by the order core.

pub mod customer;
pub mod product;
pub mod supplier;

// Re-exports
pub use customer::*;
pub use product::*;
pub use supplier::*;

/// Common lookup surface of master records
pub trait CatalogRecord {
    fn code(&self) -> &str;
    fn name(&self) -> &str;

    /// Case-insensitive substring match on code or name; an empty query matches
    fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.code().to_lowercase().contains(&query) || self.name().to_lowercase().contains(&query)
    }
}

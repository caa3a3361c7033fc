//! Order Module
//!
//! Types for purchase orders:
//! - Line items: flat product/quantity/price entries
//! - Order keys: derived identifiers grouping lines into orders
//! - Headers: aggregated projections with tax totals

pub mod header;
pub mod key;
pub mod line_item;
pub mod types;

// Re-exports
pub use header::{OrderHeader, OrderTotals};
pub use key::OrderKey;
pub use line_item::{BusinessKey, LineItem, LineItemInput};
pub use types::*;

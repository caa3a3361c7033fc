//! Order core
//!
//! Pure projections over the flat line-item list, plus the small pieces of
//! state the list screens keep around it:
//!
//! - **aggregator**: lines → headers with tax totals
//! - **filter**: search criteria over headers
//! - **rowspan**: consecutive-duplicate row grouping for detail tables
//! - **order_no**: random order numbers
//! - **deleted**: deleted-order tracker consulted by search
//! - **selection**: selected rows and the empty-selection guard
//! - **pagination**: page slicing for header lists
//! - **book**: owner of the line collection and its mutations
//!
//! # Data Flow
//!
//! ```text
//! OrderDataProvider → OrderBook (lines)
//!                         ↓ aggregate
//!                     OrderHeader[] → filter → paginate
//!                         ↓ per header
//!                     compute_row_spans → expand_rows
//! ```

pub mod aggregator;
pub mod book;
pub mod deleted;
pub mod filter;
pub mod order_no;
pub mod pagination;
pub mod rowspan;
pub mod selection;

// Re-exports
pub use aggregator::{aggregate, aggregate_with};
pub use book::{DetailRows, LineChanges, OrderBook};
pub use deleted::DeletedOrders;
pub use filter::{DateRange, SearchCriteria, filter, filter_headers};
pub use order_no::{generate_order_no, generate_order_no_with};
pub use pagination::{Page, PageSize, paginate};
pub use rowspan::{RowRender, RowSpanPlan, compute_row_spans, expand_rows};
pub use selection::{OrderAction, Selection};

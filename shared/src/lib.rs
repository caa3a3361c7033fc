//! Shared types for the order desk
//!
//! Data model and error types used by the order core and its callers:
//! line items, order keys, headers, master records and the unified
//! error system.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use order::{LineItem, LineItemInput, OrderHeader, OrderKey, OrderTotals};

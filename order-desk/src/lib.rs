//! Order desk - purchase order aggregation core
//!
//! # Overview
//!
//! Order lines are entered flat (supplier, staff code, order form number,
//! product, quantity, price) and grouped into orders by their derived key.
//! This crate provides:
//!
//! - **Aggregation** (`orders::aggregator`): lines → order headers with tax totals
//! - **Search** (`orders::filter`): criteria over headers, deleted-order aware
//! - **Row spans** (`orders::rowspan`): consecutive-duplicate grouping for detail tables
//! - **Order book** (`orders::book`): the line collection and its edits
//! - **Forms** (`forms`): one parameterized form state for every entry screen
//! - **Shortcuts** (`shortcuts`): function-key registry scoped to views
//!
//! # Module layout
//!
//! ```text
//! order-desk/src/
//! ├── core/        # configuration
//! ├── utils/       # logger, date parsing, validation
//! ├── pricing/     # tax policy and totals
//! ├── orders/      # aggregation, search, row spans, book
//! ├── provider/    # data provider trait + sample data
//! ├── forms/       # form specs and state
//! └── shortcuts/   # function-key registry
//! ```

pub mod core;
pub mod forms;
pub mod orders;
pub mod pricing;
pub mod provider;
pub mod shortcuts;
pub mod utils;

// Re-export public types
pub use crate::core::Config;
pub use orders::{OrderBook, SearchCriteria, aggregate, compute_row_spans, filter};
pub use pricing::{TaxCalculator, TaxPolicy};
pub use provider::{MockDataProvider, OrderDataProvider};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and initialize logging
pub fn setup_environment() -> Config {
    // Missing .env is fine: every setting has a default
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    if config.is_production() && config.log_dir.is_none() {
        tracing::warn!("LOG_DIR is not set in production, logging to stdout only");
    }

    tracing::debug!(dotenv_loaded, environment = %config.environment, "Environment ready");
    config
}

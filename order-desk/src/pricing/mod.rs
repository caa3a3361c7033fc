//! Pricing Module
//!
//! Consumption tax and order totals. Every header total in the desk is
//! computed through [`TaxCalculator`].

mod tax;

pub use tax::*;

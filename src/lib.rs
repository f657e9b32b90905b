#![doc(test(attr(deny(warnings))))]

//! Expense Core turns a vehicle's fetched expense history into dashboard
//! figures: per-category cost totals, fuel-efficiency series and statistics,
//! service reminder alerts, and the session state that gates admin areas.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_core::{aggregate, domain::Expense, filters::TimeFilter};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();
//! let expenses = vec![
//!     Expense::fuel("a", day(1), 50.0, 10_000, 40.0),
//!     Expense::fuel("b", day(8), 48.0, 10_500, 50.0),
//! ];
//! let result = aggregate(&expenses, TimeFilter::for_year(2024));
//! assert_eq!(result.totals_by_category.fuel, 98.0);
//! assert_eq!(result.efficiency.last, 10.0);
//! ```

pub mod aggregation;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod format;
pub mod ingest;
pub mod reminders;
pub mod session;
pub mod utils;
pub mod validation;

pub use aggregation::{aggregate, ExpenseAggregator};
pub use errors::{ExpenseError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

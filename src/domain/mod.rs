pub mod common;
pub mod expense;
pub mod summary;

pub use common::{Displayable, Identifiable};
pub use expense::{Expense, ExpenseDetails, ExpenseKind, FuelDetails, ServiceDetails};
pub use summary::{
    AggregationResult, CategoryTotals, CostPoint, EfficiencySample, EfficiencySummary,
};

pub use crate::filters::TimeFilter;

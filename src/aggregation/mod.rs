//! Dashboard aggregation over an already-fetched expense list.
//!
//! Every operation is pure: inputs are borrowed, results are freshly built,
//! and malformed numbers degrade to zero instead of failing.

mod efficiency;

use std::cmp::Reverse;

use crate::domain::{AggregationResult, CategoryTotals, CostPoint, EfficiencySummary, Expense};
use crate::filters::TimeFilter;

pub use efficiency::compute_efficiency;

/// Stateless entry point for the dashboard figures.
pub struct ExpenseAggregator;

impl ExpenseAggregator {
    /// Expenses inside the filter window, newest first.
    pub fn filter_by_period(expenses: &[Expense], filter: TimeFilter) -> Vec<Expense> {
        let mut filtered: Vec<Expense> = expenses
            .iter()
            .filter(|expense| filter.matches(expense.date))
            .cloned()
            .collect();
        filtered.sort_by_key(|expense| Reverse(expense.date));
        filtered
    }

    /// Per-category cost totals; unrecognized records are left out.
    pub fn sum_by_category(expenses: &[Expense]) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for expense in expenses {
            if let Some(kind) = expense.kind() {
                totals.add(kind, cost_of(expense));
            }
        }
        totals
    }

    /// km/L samples and statistics from adjacent fill-ups, regardless of input order.
    pub fn compute_efficiency(expenses: &[Expense]) -> EfficiencySummary {
        efficiency::compute_efficiency(expenses)
    }

    /// Filters once, then derives totals and efficiency from the same window.
    pub fn aggregate(expenses: &[Expense], filter: TimeFilter) -> AggregationResult {
        let filtered_expenses = Self::filter_by_period(expenses, filter);
        let totals_by_category = Self::sum_by_category(&filtered_expenses);
        let efficiency = Self::compute_efficiency(&filtered_expenses);

        tracing::debug!(
            input = expenses.len(),
            filtered = filtered_expenses.len(),
            samples = efficiency.samples.len(),
            year = filter.year,
            month = filter.month,
            "aggregated expenses"
        );

        AggregationResult {
            filter,
            filtered_expenses,
            totals_by_category,
            efficiency,
        }
    }

    /// Fuel cost chart points inside the filter window, oldest first.
    pub fn fuel_cost_series(expenses: &[Expense], filter: TimeFilter) -> Vec<CostPoint> {
        efficiency::fuel_entries_ascending(expenses)
            .into_iter()
            .filter(|expense| filter.matches(expense.date))
            .map(|expense| CostPoint {
                date: expense.date,
                cost: cost_of(expense),
            })
            .collect()
    }
}

pub fn aggregate(expenses: &[Expense], filter: TimeFilter) -> AggregationResult {
    ExpenseAggregator::aggregate(expenses, filter)
}

fn cost_of(expense: &Expense) -> f64 {
    if expense.total_cost.is_finite() {
        expense.total_cost
    } else {
        0.0
    }
}

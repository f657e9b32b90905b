use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::expense::{Expense, ExpenseKind};
use crate::filters::TimeFilter;

/// Summed `total_cost` per expense category. Every category is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotals {
    pub fuel: f64,
    pub service: f64,
    pub insurance: f64,
    pub registration: f64,
}

impl CategoryTotals {
    pub fn get(&self, kind: ExpenseKind) -> f64 {
        match kind {
            ExpenseKind::Fuel => self.fuel,
            ExpenseKind::Service => self.service,
            ExpenseKind::Insurance => self.insurance,
            ExpenseKind::Registration => self.registration,
        }
    }

    pub fn add(&mut self, kind: ExpenseKind, amount: f64) {
        let slot = match kind {
            ExpenseKind::Fuel => &mut self.fuel,
            ExpenseKind::Service => &mut self.service,
            ExpenseKind::Insurance => &mut self.insurance,
            ExpenseKind::Registration => &mut self.registration,
        };
        *slot += amount;
    }

    pub fn total(&self) -> f64 {
        ExpenseKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }

    pub fn as_map(&self) -> BTreeMap<ExpenseKind, f64> {
        ExpenseKind::ALL
            .iter()
            .map(|kind| (*kind, self.get(*kind)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EfficiencySample {
    pub date: NaiveDate,
    pub km_per_liter: f64,
}

/// Fuel efficiency time series (oldest first) with its summary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EfficiencySummary {
    pub samples: Vec<EfficiencySample>,
    pub last: f64,
    pub average: f64,
    pub best: f64,
}

impl EfficiencySummary {
    pub fn from_samples(samples: Vec<EfficiencySample>) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let last = samples.last().map(|s| s.km_per_liter).unwrap_or(0.0);
        let best = samples
            .iter()
            .map(|s| s.km_per_liter)
            .fold(0.0_f64, f64::max);
        let sum: f64 = samples.iter().map(|s| s.km_per_liter).sum();
        let average = sum / samples.len() as f64;
        Self {
            samples,
            last,
            average,
            best,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Point on the fuel cost chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostPoint {
    pub date: NaiveDate,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationResult {
    pub filter: TimeFilter,
    /// Newest first.
    pub filtered_expenses: Vec<Expense>,
    pub totals_by_category: CategoryTotals,
    pub efficiency: EfficiencySummary,
}

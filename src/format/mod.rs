//! Display strings for the dashboard summary cards.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::AggregationResult;

const GROUPING_SEPARATOR: char = ',';
const EFFICIENCY_UNIT: &str = "km/L";

/// Formats `value` with a fixed number of decimals and thousands grouping.
pub fn format_number(value: f64, precision: usize) -> String {
    let body = format!("{:.*}", precision, value.abs());
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    let sign = if value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}{fraction}")
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// `₱1,234.50`-style amount with the sign ahead of the symbol.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let body = format_number(amount, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-{symbol}{rest}"),
        None => format!("{symbol}{body}"),
    }
}

pub fn format_efficiency(km_per_liter: f64) -> String {
    let value = if km_per_liter.is_finite() {
        km_per_liter
    } else {
        0.0
    };
    format!("{:.2} {}", value, EFFICIENCY_UNIT)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub hint: String,
}

impl SummaryCard {
    fn new(title: &str, value: String, hint: &str) -> Self {
        Self {
            title: title.into(),
            value,
            hint: hint.into(),
        }
    }
}

/// The cost and efficiency cards shown above the expense list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCards {
    pub costs: Vec<SummaryCard>,
    pub efficiency: Vec<SummaryCard>,
}

impl SummaryCards {
    pub fn from_result(result: &AggregationResult, config: &Config) -> Self {
        let totals = &result.totals_by_category;
        let symbol = config.currency_symbol.as_str();
        let costs = vec![
            SummaryCard::new(
                "Total Fuel Cost",
                format_currency(totals.fuel, symbol),
                "Total fuel expenses over the selected period.",
            ),
            SummaryCard::new(
                "Total Service Cost",
                format_currency(totals.service, symbol),
                "Total costs from maintenance and services.",
            ),
            SummaryCard::new(
                "Insurance Cost",
                format_currency(totals.insurance, symbol),
                "All insurance-related expenses.",
            ),
            SummaryCard::new(
                "Registration Cost",
                format_currency(totals.registration, symbol),
                "All vehicle registration-related expenses.",
            ),
        ];

        let stats = &result.efficiency;
        let efficiency = vec![
            SummaryCard::new(
                "Last Efficiency",
                format_efficiency(stats.last),
                "Most recent valid fill-up pair.",
            ),
            SummaryCard::new(
                "Average Efficiency",
                format_efficiency(stats.average),
                "Mean across the selected period.",
            ),
            SummaryCard::new(
                "Best Efficiency",
                format_efficiency(stats.best),
                "Highest value in the selected period.",
            ),
        ];

        Self { costs, efficiency }
    }
}

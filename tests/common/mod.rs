#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use expense_core::domain::{Expense, ExpenseDetails};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// A mixed history spanning 2023-2024 with every category and one unknown type.
pub fn mixed_history() -> Vec<Expense> {
    vec![
        Expense::fuel("f1", date(2023, 11, 28), 2_400.0, 10_000, 45.0),
        Expense::service("s1", date(2023, 12, 2), 3_500.0, 10_150, "Oil and Oil Filter Change"),
        Expense::fuel("f2", date(2024, 1, 6), 2_600.0, 10_480, 48.0),
        Expense::insurance("i1", date(2024, 1, 15), 18_000.0),
        Expense::fuel("f3", date(2024, 1, 20), 2_300.0, 10_950, 42.0),
        Expense::registration("r1", date(2024, 2, 3), 1_800.0),
        Expense::fuel("f4", date(2024, 2, 17), 2_550.0, 11_400, 45.0),
        Expense::new(
            "x1",
            date(2024, 2, 20),
            150.0,
            ExpenseDetails::Unrecognized {
                kind: "parking".into(),
            },
        ),
        Expense::service("s2", date(2024, 3, 9), 1_200.0, 11_700, "Tire Rotation"),
    ]
}

/// `count` weekly fill-ups starting at `start`, 450 km and 40 L apart.
pub fn weekly_fillups(start: NaiveDate, count: usize) -> Vec<Expense> {
    (0..count)
        .map(|idx| {
            Expense::fuel(
                format!("w{idx}"),
                start + Duration::weeks(idx as i64),
                2_000.0,
                20_000 + 450 * idx as u64,
                40.0,
            )
        })
        .collect()
}

pub fn ids(expenses: &[Expense]) -> Vec<&str> {
    expenses.iter().map(|e| e.id.as_str()).collect()
}

pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 0.01
}

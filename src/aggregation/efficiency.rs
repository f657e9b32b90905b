use crate::domain::{EfficiencySample, EfficiencySummary, Expense};

/// Fuel entries in ascending date order. Equal dates keep their input order.
pub(crate) fn fuel_entries_ascending(expenses: &[Expense]) -> Vec<&Expense> {
    let mut entries: Vec<&Expense> = expenses.iter().filter(|e| e.is_fuel()).collect();
    entries.sort_by_key(|e| e.date);
    entries
}

/// Derives km/L samples from every pair of temporally adjacent fill-ups.
///
/// A pair yields a sample only when the odometer advanced and the later
/// fill-up has a positive volume. Rejected pairs do not shift the pairing.
pub fn compute_efficiency(expenses: &[Expense]) -> EfficiencySummary {
    let entries = fuel_entries_ascending(expenses);

    let samples = entries
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            let distance = odometer_of(curr) as i128 - odometer_of(prev) as i128;
            let liters = curr
                .fuel_details()
                .map(|fuel| fuel.liters)
                .filter(|liters| liters.is_finite())
                .unwrap_or(0.0);
            if distance > 0 && liters > 0.0 {
                Some(EfficiencySample {
                    date: curr.date,
                    km_per_liter: distance as f64 / liters,
                })
            } else {
                None
            }
        })
        .collect();

    EfficiencySummary::from_samples(samples)
}

fn odometer_of(expense: &Expense) -> u64 {
    expense.odometer().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn rejected_pair_does_not_break_chain() {
        // 0 -> 400 has no liters, 400 -> 1000 is still compared against 400.
        let expenses = vec![
            Expense::fuel("a", date(1), 50.0, 0, 40.0),
            Expense::fuel("b", date(8), 50.0, 400, 0.0),
            Expense::fuel("c", date(15), 50.0, 1000, 50.0),
        ];
        let summary = compute_efficiency(&expenses);
        assert_eq!(summary.samples.len(), 1);
        assert_eq!(summary.samples[0].date, date(15));
        assert!((summary.samples[0].km_per_liter - 12.0).abs() < 1e-9);
    }

    #[test]
    fn input_order_does_not_matter() {
        let expenses = vec![
            Expense::fuel("c", date(15), 50.0, 1000, 50.0),
            Expense::fuel("a", date(1), 50.0, 0, 40.0),
            Expense::fuel("b", date(8), 50.0, 500, 50.0),
        ];
        let summary = compute_efficiency(&expenses);
        let values: Vec<f64> = summary.samples.iter().map(|s| s.km_per_liter).collect();
        assert_eq!(values, vec![10.0, 10.0]);
    }

    #[test]
    fn non_fuel_entries_are_skipped() {
        let expenses = vec![
            Expense::fuel("a", date(1), 50.0, 100, 40.0),
            Expense::service("s", date(3), 80.0, 300, "Waxing"),
            Expense::fuel("b", date(8), 50.0, 600, 50.0),
        ];
        let summary = compute_efficiency(&expenses);
        assert_eq!(summary.samples.len(), 1);
        assert!((summary.last - 10.0).abs() < 1e-9);
    }

    #[test]
    fn nan_liters_is_rejected() {
        let expenses = vec![
            Expense::fuel("a", date(1), 50.0, 0, 40.0),
            Expense::fuel("b", date(8), 50.0, 500, f64::NAN),
        ];
        assert!(compute_efficiency(&expenses).is_empty());
    }
}

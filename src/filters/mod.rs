//! Year/month selection applied to the dashboard and its charts.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const ALL: i32 = 0;
pub const DEFAULT_YEAR_SPAN: u32 = 10;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar window selector. `0` in either field means "all".
///
/// `month` only takes effect when `year` is set; a month paired with the
/// all-years selection is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct TimeFilter {
    pub year: i32,
    pub month: u32,
}

impl TimeFilter {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn for_year(year: i32) -> Self {
        Self { year, month: 0 }
    }

    /// The dashboard's initial selection: the current year, every month.
    pub fn default_for(today: NaiveDate) -> Self {
        Self::for_year(today.year())
    }

    /// Month forced to "all" when the year is "all" or the month is out of range.
    pub fn normalized(&self) -> Self {
        if self.year == ALL || self.month > 12 {
            Self::for_year(self.year)
        } else {
            *self
        }
    }

    pub fn is_all_time(&self) -> bool {
        self.year == ALL
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        let filter = self.normalized();
        if filter.year == ALL {
            return true;
        }
        date.year() == filter.year && (filter.month == 0 || date.month() == filter.month)
    }

    pub fn label(&self) -> String {
        let filter = self.normalized();
        match (filter.year, filter.month) {
            (ALL, _) => "All Time".into(),
            (year, 0) => year.to_string(),
            (year, month) => format!("{} {}", month_name(month).unwrap_or("?"), year),
        }
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[(month - 1) as usize]),
        _ => None,
    }
}

/// Selectable years, newest first, preceded by the all-years entry.
pub fn year_options(today: NaiveDate, span: u32) -> Vec<i32> {
    let current = today.year();
    std::iter::once(ALL)
        .chain((0..span as i32).map(|offset| current - offset))
        .collect()
}

pub fn month_options() -> Vec<(u32, &'static str)> {
    std::iter::once((0, "All Months"))
        .chain(MONTH_NAMES.iter().enumerate().map(|(idx, name)| (idx as u32 + 1, *name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_is_ignored_without_year() {
        let filter = TimeFilter::new(0, 5);
        assert!(filter.matches(date(2021, 11, 3)));
        assert_eq!(filter.normalized(), TimeFilter::all_time());
    }

    #[test]
    fn year_and_month_must_both_match() {
        let filter = TimeFilter::new(2024, 3);
        assert!(filter.matches(date(2024, 3, 31)));
        assert!(!filter.matches(date(2024, 4, 1)));
        assert!(!filter.matches(date(2023, 3, 15)));
    }

    #[test]
    fn out_of_range_month_normalizes_to_all() {
        assert_eq!(TimeFilter::new(2024, 13).normalized(), TimeFilter::for_year(2024));
        assert!(TimeFilter::new(2024, 13).matches(date(2024, 3, 1)));
        assert!(!TimeFilter::new(2024, 13).matches(date(2023, 3, 1)));
    }

    #[test]
    fn default_filter_is_current_year() {
        assert_eq!(
            TimeFilter::default_for(date(2025, 7, 9)),
            TimeFilter::new(2025, 0)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(TimeFilter::all_time().label(), "All Time");
        assert_eq!(TimeFilter::for_year(2023).label(), "2023");
        assert_eq!(TimeFilter::new(2024, 3).label(), "March 2024");
    }

    #[test]
    fn options_lists() {
        let years = year_options(date(2025, 1, 1), DEFAULT_YEAR_SPAN);
        assert_eq!(years.len(), 11);
        assert_eq!(years[0], 0);
        assert_eq!(years[1], 2025);
        assert_eq!(years[10], 2016);

        let months = month_options();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0], (0, "All Months"));
        assert_eq!(months[12], (12, "December"));
    }
}

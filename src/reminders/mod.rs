//! Service reminders: when a maintenance item comes due by distance or by time.

pub mod catalog;
mod months;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use catalog::{
    default_reminder_for, default_service_types, find_service_type, ServiceTypeDefault,
};
pub use months::shift_month;

/// A reminder attached to a vehicle. A zero interval disables that trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReminder {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub odometer_interval: u64,
    #[serde(default)]
    pub time_interval_months: u32,
    pub last_service_date: NaiveDate,
    #[serde(default)]
    pub last_service_odometer: u64,
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ServiceReminder {
    pub fn new(
        service_type: impl Into<String>,
        odometer_interval: u64,
        time_interval_months: u32,
        last_service_date: NaiveDate,
        last_service_odometer: u64,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            odometer_interval,
            time_interval_months,
            last_service_date,
            last_service_odometer,
            is_enabled: true,
        }
    }

    /// Seeds a reminder from the catalog entry for `service_type`, or zero intervals when absent.
    pub fn from_catalog(
        catalog: &[ServiceTypeDefault],
        service_type: &str,
        last_service_date: NaiveDate,
        last_service_odometer: u64,
    ) -> Self {
        let (odometer_interval, time_interval_months) =
            find_service_type(catalog, service_type)
                .map(|entry| (entry.odometer_interval, entry.time_interval_months))
                .unwrap_or((0, 0));
        Self::new(
            service_type,
            odometer_interval,
            time_interval_months,
            last_service_date,
            last_service_odometer,
        )
    }

    pub fn due_odometer(&self) -> Option<u64> {
        if self.odometer_interval == 0 {
            return None;
        }
        Some(self.last_service_odometer.saturating_add(self.odometer_interval))
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        if self.time_interval_months == 0 {
            return None;
        }
        let months = i32::try_from(self.time_interval_months).ok()?;
        Some(shift_month(self.last_service_date, months))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderTrigger {
    Odometer,
    Time,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderAlert {
    pub service_type: String,
    pub trigger: ReminderTrigger,
}

impl ReminderAlert {
    pub fn message(&self) -> String {
        let reason = match self.trigger {
            ReminderTrigger::Odometer => "Odometer",
            ReminderTrigger::Time => "Time-based",
        };
        format!("Service due: {} ({})", self.service_type, reason)
    }
}

impl fmt::Display for ReminderAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Alerts for every enabled reminder that has come due, odometer before time per reminder.
pub fn check_reminders(
    reminders: &[ServiceReminder],
    current_odometer: u64,
    today: NaiveDate,
) -> Vec<ReminderAlert> {
    let mut alerts = Vec::new();
    for reminder in reminders.iter().filter(|r| r.is_enabled) {
        if reminder
            .due_odometer()
            .is_some_and(|due| current_odometer >= due)
        {
            alerts.push(ReminderAlert {
                service_type: reminder.service_type.clone(),
                trigger: ReminderTrigger::Odometer,
            });
        }
        if reminder.due_date().is_some_and(|due| today >= due) {
            alerts.push(ReminderAlert {
                service_type: reminder.service_type.clone(),
                trigger: ReminderTrigger::Time,
            });
        }
    }
    tracing::debug!(
        reminders = reminders.len(),
        alerts = alerts.len(),
        current_odometer,
        "checked service reminders"
    );
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_intervals_never_trigger() {
        let reminder = ServiceReminder::new("Waxing", 0, 0, date(2020, 1, 1), 0);
        assert_eq!(reminder.due_odometer(), None);
        assert_eq!(reminder.due_date(), None);
        assert!(check_reminders(&[reminder], 1_000_000, date(2030, 1, 1)).is_empty());
    }

    #[test]
    fn catalog_seeding_uses_defaults() {
        let reminder = ServiceReminder::from_catalog(
            default_service_types(),
            "Tire Rotation",
            date(2024, 1, 1),
            20_000,
        );
        assert_eq!(reminder.due_odometer(), Some(30_000));
        assert_eq!(reminder.due_date(), Some(date(2025, 1, 1)));

        let custom =
            ServiceReminder::from_catalog(default_service_types(), "Detailing", date(2024, 1, 1), 0);
        assert_eq!(custom.odometer_interval, 0);
        assert_eq!(custom.time_interval_months, 0);
    }

    #[test]
    fn alert_messages() {
        let alert = ReminderAlert {
            service_type: "Coolant Flush".into(),
            trigger: ReminderTrigger::Time,
        };
        assert_eq!(alert.to_string(), "Service due: Coolant Flush (Time-based)");
    }
}

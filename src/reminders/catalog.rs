use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default reminder cadence for a service type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeDefault {
    #[serde(rename = "type")]
    pub name: String,
    pub odometer_interval: u64,
    pub time_interval_months: u32,
}

impl ServiceTypeDefault {
    fn new(name: &str, odometer_interval: u64, time_interval_months: u32) -> Self {
        Self {
            name: name.into(),
            odometer_interval,
            time_interval_months,
        }
    }
}

static DEFAULT_SERVICE_TYPES: Lazy<Vec<ServiceTypeDefault>> = Lazy::new(|| {
    vec![
        ServiceTypeDefault::new("Oil and Oil Filter Change", 5_000, 6),
        ServiceTypeDefault::new("Preventive Maintenance Service (PMS)", 10_000, 6),
        ServiceTypeDefault::new("Tire Rotation", 10_000, 12),
        ServiceTypeDefault::new("Brake Inspection", 10_000, 12),
        ServiceTypeDefault::new("Cabin Air Filter Replacement", 15_000, 12),
        ServiceTypeDefault::new("Air Filter Replacement", 15_000, 12),
        ServiceTypeDefault::new("Brake Fluid Replacement", 30_000, 24),
        ServiceTypeDefault::new("Transmission Fluid Change", 60_000, 48),
        ServiceTypeDefault::new("Coolant Flush", 50_000, 24),
        ServiceTypeDefault::new("Spark Plug Replacement", 30_000, 24),
        ServiceTypeDefault::new("Timing Belt Replacement", 100_000, 60),
        ServiceTypeDefault::new("Battery Replacement", 50_000, 36),
        ServiceTypeDefault::new("Waxing", 0, 6),
    ]
});

/// Built-in service types used until an administrator publishes a catalog.
pub fn default_service_types() -> &'static [ServiceTypeDefault] {
    &DEFAULT_SERVICE_TYPES
}

/// Looks up a service type by exact name in `catalog`.
pub fn find_service_type<'a>(
    catalog: &'a [ServiceTypeDefault],
    name: &str,
) -> Option<&'a ServiceTypeDefault> {
    catalog.iter().find(|entry| entry.name == name)
}

/// `(odometer_interval, time_interval_months)` for a built-in service, `(0, 0)` when unknown.
pub fn default_reminder_for(name: &str) -> (u64, u32) {
    find_service_type(default_service_types(), name)
        .map(|entry| (entry.odometer_interval, entry.time_interval_months))
        .unwrap_or((0, 0))
}

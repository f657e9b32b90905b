//! Decoding of expense payloads returned by the remote API.

mod lenient;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Expense, ExpenseDetails, ExpenseKind, FuelDetails, Identifiable, ServiceDetails,
};
use crate::errors::{ExpenseError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Time zone used to turn a stored instant into the calendar date it is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DateBasis {
    #[default]
    Utc,
    /// The host's local zone, as a browser would resolve it.
    Local,
    FixedOffset { minutes: i32 },
}

impl DateBasis {
    pub fn calendar_date(&self, instant: DateTime<FixedOffset>) -> NaiveDate {
        match self {
            DateBasis::Utc => instant.with_timezone(&Utc).date_naive(),
            DateBasis::Local => instant.with_timezone(&Local).date_naive(),
            DateBasis::FixedOffset { minutes } => FixedOffset::east_opt(minutes * 60)
                .map(|offset| instant.with_timezone(&offset).date_naive())
                .unwrap_or_else(|| instant.with_timezone(&Utc).date_naive()),
        }
    }

    /// Accepts `YYYY-MM-DD`, RFC 3339 instants and offset-less timestamps.
    pub fn parse_date(&self, raw: &str) -> Result<NaiveDate> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(date);
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(self.calendar_date(instant));
        }
        NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
            .map(|timestamp| timestamp.date())
            .map_err(|_| ExpenseError::InvalidDate(raw.to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelDetailsRecord {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub liters: f64,
    #[serde(default)]
    pub fuel_brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub price_per_liter: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailsRecord {
    #[serde(default)]
    pub service_type: Option<String>,
}

/// Expense as the API serialises it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(rename = "_id", default)]
    pub object_id: String,
    /// Virtual `id` some serialisers emit next to `_id`; used only when `_id` is absent.
    #[serde(rename = "id", default)]
    pub virtual_id: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_cost: f64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub odometer: u64,
    #[serde(default)]
    pub fuel_details: Option<FuelDetailsRecord>,
    #[serde(default)]
    pub service_details: Option<ServiceDetailsRecord>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> &str {
        if self.object_id.is_empty() {
            self.virtual_id.as_deref().unwrap_or_default()
        } else {
            &self.object_id
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<SkippedRecord>,
}

impl Expense {
    /// Converts an API record, attaching the kind-specific payload to the matching variant.
    pub fn try_from_record(record: ExpenseRecord, basis: DateBasis) -> Result<Self> {
        let id = record.id().to_string();
        let date = match record.date.as_deref() {
            Some(raw) => basis.parse_date(raw)?,
            None => return Err(ExpenseError::InvalidDate("missing date".into())),
        };

        let raw_kind = record.kind.unwrap_or_default();
        let details = match ExpenseKind::parse(&raw_kind) {
            Some(ExpenseKind::Fuel) => {
                let fuel = record.fuel_details.unwrap_or_default();
                ExpenseDetails::Fuel(FuelDetails {
                    odometer: record.odometer,
                    liters: fuel.liters,
                    fuel_brand: fuel.fuel_brand,
                    price_per_liter: fuel.price_per_liter,
                })
            }
            Some(ExpenseKind::Service) => ExpenseDetails::Service(ServiceDetails {
                odometer: record.odometer,
                service_type: record.service_details.and_then(|s| s.service_type),
            }),
            Some(ExpenseKind::Insurance) => ExpenseDetails::Insurance,
            Some(ExpenseKind::Registration) => ExpenseDetails::Registration,
            None => {
                tracing::debug!(id = %id, kind = %raw_kind, "unrecognized expense type");
                ExpenseDetails::Unrecognized { kind: raw_kind }
            }
        };

        Ok(Self {
            id,
            date,
            total_cost: record.total_cost,
            details,
            notes: record.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

/// Converts records one by one; records that cannot be dated are reported, not fatal.
pub fn from_records(records: Vec<ExpenseRecord>, basis: DateBasis) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for record in records {
        let id = record.id().to_string();
        match Expense::try_from_record(record, basis) {
            Ok(expense) => outcome.expenses.push(expense),
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "skipping expense record");
                outcome.skipped.push(SkippedRecord {
                    id,
                    reason: err.to_string(),
                });
            }
        }
    }
    outcome
}

/// Decodes the JSON array returned by the expenses endpoint.
pub fn parse_expenses(json: &str, basis: DateBasis) -> Result<IngestOutcome> {
    let records: Vec<ExpenseRecord> = serde_json::from_str(json)?;
    Ok(from_records(records, basis))
}

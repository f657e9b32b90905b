//! Domain types representing recorded vehicle expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// The four expense categories tracked per vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    Fuel,
    Service,
    Insurance,
    Registration,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 4] = [
        ExpenseKind::Fuel,
        ExpenseKind::Service,
        ExpenseKind::Insurance,
        ExpenseKind::Registration,
    ];

    /// Parses the API's `type` string. Matching ignores case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fuel" => Some(ExpenseKind::Fuel),
            "service" => Some(ExpenseKind::Service),
            "insurance" => Some(ExpenseKind::Insurance),
            "registration" => Some(ExpenseKind::Registration),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseKind::Fuel => "fuel",
            ExpenseKind::Service => "service",
            ExpenseKind::Insurance => "insurance",
            ExpenseKind::Registration => "registration",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseKind::Fuel => "Fuel",
            ExpenseKind::Service => "Service",
            ExpenseKind::Insurance => "Insurance",
            ExpenseKind::Registration => "Registration",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelDetails {
    pub odometer: u64,
    pub liters: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_liter: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceDetails {
    pub odometer: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

/// Kind-specific payload of an expense.
///
/// `Unrecognized` keeps records whose `type` the API reported but this crate
/// does not know, so they can still be listed while staying out of totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpenseDetails {
    Fuel(FuelDetails),
    Service(ServiceDetails),
    Insurance,
    Registration,
    Unrecognized { kind: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub total_cost: f64,
    pub details: ExpenseDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        total_cost: f64,
        details: ExpenseDetails,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            total_cost,
            details,
            notes: None,
        }
    }

    pub fn fuel(
        id: impl Into<String>,
        date: NaiveDate,
        total_cost: f64,
        odometer: u64,
        liters: f64,
    ) -> Self {
        Self::new(
            id,
            date,
            total_cost,
            ExpenseDetails::Fuel(FuelDetails {
                odometer,
                liters,
                fuel_brand: None,
                price_per_liter: None,
            }),
        )
    }

    pub fn service(
        id: impl Into<String>,
        date: NaiveDate,
        total_cost: f64,
        odometer: u64,
        service_type: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            date,
            total_cost,
            ExpenseDetails::Service(ServiceDetails {
                odometer,
                service_type: Some(service_type.into()),
            }),
        )
    }

    pub fn insurance(id: impl Into<String>, date: NaiveDate, total_cost: f64) -> Self {
        Self::new(id, date, total_cost, ExpenseDetails::Insurance)
    }

    pub fn registration(id: impl Into<String>, date: NaiveDate, total_cost: f64) -> Self {
        Self::new(id, date, total_cost, ExpenseDetails::Registration)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Known category of the expense, `None` for unrecognized records.
    pub fn kind(&self) -> Option<ExpenseKind> {
        match &self.details {
            ExpenseDetails::Fuel(_) => Some(ExpenseKind::Fuel),
            ExpenseDetails::Service(_) => Some(ExpenseKind::Service),
            ExpenseDetails::Insurance => Some(ExpenseKind::Insurance),
            ExpenseDetails::Registration => Some(ExpenseKind::Registration),
            ExpenseDetails::Unrecognized { .. } => None,
        }
    }

    pub fn odometer(&self) -> Option<u64> {
        match &self.details {
            ExpenseDetails::Fuel(fuel) => Some(fuel.odometer),
            ExpenseDetails::Service(service) => Some(service.odometer),
            _ => None,
        }
    }

    pub fn fuel_details(&self) -> Option<&FuelDetails> {
        match &self.details {
            ExpenseDetails::Fuel(fuel) => Some(fuel),
            _ => None,
        }
    }

    pub fn is_fuel(&self) -> bool {
        matches!(self.details, ExpenseDetails::Fuel(_))
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        match &self.details {
            ExpenseDetails::Fuel(fuel) => match &fuel.fuel_brand {
                Some(brand) => format!("Fuel: {}", brand),
                None => "Fuel".into(),
            },
            ExpenseDetails::Service(service) => match &service.service_type {
                Some(kind) => format!("Service: {}", kind),
                None => "Service".into(),
            },
            ExpenseDetails::Insurance => "Insurance Payment".into(),
            ExpenseDetails::Registration => "Vehicle Registration".into(),
            ExpenseDetails::Unrecognized { kind } => format!("Unrecognized ({})", kind),
        }
    }
}

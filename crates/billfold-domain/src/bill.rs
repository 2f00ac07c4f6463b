//! Domain models for payable bills and entry-form drafts.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One concrete, payable bill instance.
///
/// Recurring submissions materialize into several `Bill` records, one per
/// occurrence; every instance of a series shares description, amount,
/// frequency, and series end date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub id: u64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub recurring: bool,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_end: Option<NaiveDate>,
}

/// Enumerates the payment state of a bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillStatus::Pending => "Pending",
            BillStatus::Paid => "Paid",
            BillStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// Cadence of a recurring series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Annual,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Annual => "Annual",
        };
        f.write_str(label)
    }
}

/// The single "current draft" behind the entry form.
///
/// `origin` carries the id of the bill being edited; `None` means the draft
/// creates a new bill. Date fields hold the raw user input so malformed
/// values surface as field errors during validation instead of panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDraft {
    pub origin: Option<u64>,
    pub description: String,
    pub amount: Option<Decimal>,
    pub due_date: String,
    pub status: BillStatus,
    pub recurring: bool,
    pub frequency: Frequency,
    pub series_end: String,
}

impl BillDraft {
    /// Pre-fills a draft from an existing bill for editing in place.
    pub fn edit_of(bill: &Bill) -> Self {
        Self {
            origin: Some(bill.id),
            description: bill.description.clone(),
            amount: Some(bill.amount),
            due_date: bill.due_date.to_string(),
            status: bill.status,
            recurring: bill.recurring,
            frequency: bill.frequency,
            series_end: bill
                .series_end
                .map(|end| end.to_string())
                .unwrap_or_default(),
        }
    }
}

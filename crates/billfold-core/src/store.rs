//! The in-memory bill collection with write-through persistence.

use billfold_domain::{Bill, BillDraft, BillStatus, Frequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    clock::Clock,
    recurrence,
    storage::BillStorage,
    validate::{self, FieldErrors, ValidatedBill},
    CoreError,
};

/// Typed field updates applied atomically by [`BillStore::update`].
///
/// `None` leaves a field untouched; `series_end` distinguishes "leave alone"
/// (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct BillPatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<BillStatus>,
    pub recurring: Option<bool>,
    pub frequency: Option<Frequency>,
    pub series_end: Option<Option<NaiveDate>>,
}

impl BillPatch {
    /// A patch that only changes the payment status.
    pub fn status(status: BillStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<&ValidatedBill> for BillPatch {
    /// Full-record patch used when an edit form is saved.
    fn from(validated: &ValidatedBill) -> Self {
        Self {
            description: Some(validated.description.clone()),
            amount: Some(validated.amount),
            due_date: Some(validated.due_date),
            status: Some(validated.status),
            recurring: Some(validated.recurring),
            frequency: Some(validated.frequency),
            series_end: Some(validated.series_end),
        }
    }
}

/// What happened to a submitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A single bill was created with this id.
    Created(u64),
    /// A recurring series was created; one id per instance, in due-date order.
    CreatedSeries(Vec<u64>),
    /// The draft's origin bill was updated in place.
    Updated(u64),
    /// Validation failed; nothing was stored.
    Rejected(FieldErrors),
}

/// Owner of the bill collection and the only component that mutates it.
///
/// Constructed once at process start from the persisted snapshot; every
/// successful mutation writes the complete collection back through the
/// injected [`BillStorage`] port. When a save fails the in-memory state is
/// kept (the error is surfaced so the presentation layer can warn that
/// changes may not survive a restart).
pub struct BillStore {
    bills: Vec<Bill>,
    storage: Box<dyn BillStorage>,
    clock: Box<dyn Clock>,
    last_id: u64,
}

impl BillStore {
    /// Loads the persisted snapshot; absent state means an empty collection.
    pub fn open(storage: Box<dyn BillStorage>, clock: Box<dyn Clock>) -> Result<Self, CoreError> {
        let bills = storage.load()?.unwrap_or_default();
        let last_id = bills.iter().map(|bill| bill.id).max().unwrap_or(0);
        info!(count = bills.len(), "bill store loaded");
        Ok(Self {
            bills,
            storage,
            clock,
            last_id,
        })
    }

    /// Current snapshot, insertion order preserved.
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn get(&self, id: u64) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    /// Validates and routes a draft: origin id means update in place, a
    /// recurring draft expands into a series, anything else creates one bill.
    /// Validation failures come back as [`SubmitOutcome::Rejected`] data.
    pub fn submit(&mut self, draft: &BillDraft) -> Result<SubmitOutcome, CoreError> {
        let validated = match validate::validate(draft) {
            Ok(validated) => validated,
            Err(errors) => return Ok(SubmitOutcome::Rejected(errors)),
        };

        if let Some(id) = validated.origin {
            self.update(id, BillPatch::from(&validated))?;
            return Ok(SubmitOutcome::Updated(id));
        }

        if validated.recurring {
            let instances = recurrence::expand(&validated, self.peek_id_base())?;
            let ids: Vec<u64> = instances.iter().map(|bill| bill.id).collect();
            self.add_series(instances)?;
            return Ok(SubmitOutcome::CreatedSeries(ids));
        }

        let id = self.add(Bill {
            id: 0,
            description: validated.description,
            amount: validated.amount,
            due_date: validated.due_date,
            status: validated.status,
            recurring: false,
            frequency: validated.frequency,
            series_end: None,
        })?;
        Ok(SubmitOutcome::Created(id))
    }

    /// Appends one bill, assigning the next id when the bill carries the
    /// unassigned sentinel `0`, and persists.
    pub fn add(&mut self, mut bill: Bill) -> Result<u64, CoreError> {
        if bill.id == 0 {
            bill.id = self.peek_id_base();
        }
        self.last_id = self.last_id.max(bill.id);
        let id = bill.id;
        self.bills.push(bill);
        self.persist()?;
        debug!(id, "bill added");
        Ok(id)
    }

    /// Appends a whole series as one batch: the collection gains every
    /// instance before a single persistence write, so neither the in-memory
    /// nor the persisted view ever shows a partial series.
    pub fn add_series(&mut self, instances: Vec<Bill>) -> Result<(), CoreError> {
        if instances.is_empty() {
            return Ok(());
        }
        let count = instances.len();
        self.last_id = instances
            .iter()
            .map(|bill| bill.id)
            .fold(self.last_id, u64::max);
        self.bills.extend(instances);
        self.persist()?;
        debug!(count, "recurring series added");
        Ok(())
    }

    /// Applies a typed patch to the matching record and persists.
    pub fn update(&mut self, id: u64, patch: BillPatch) -> Result<(), CoreError> {
        let bill = self
            .bills
            .iter_mut()
            .find(|bill| bill.id == id)
            .ok_or(CoreError::BillNotFound(id))?;
        if let Some(description) = patch.description {
            bill.description = description;
        }
        if let Some(amount) = patch.amount {
            bill.amount = amount;
        }
        if let Some(due_date) = patch.due_date {
            bill.due_date = due_date;
        }
        if let Some(status) = patch.status {
            bill.status = status;
        }
        if let Some(recurring) = patch.recurring {
            bill.recurring = recurring;
        }
        if let Some(frequency) = patch.frequency {
            bill.frequency = frequency;
        }
        if let Some(series_end) = patch.series_end {
            bill.series_end = series_end;
        }
        self.persist()?;
        debug!(id, "bill updated");
        Ok(())
    }

    /// Removes the bill and persists. Confirmation of destructive intent is
    /// the presentation layer's concern, not the store's.
    pub fn remove(&mut self, id: u64) -> Result<Bill, CoreError> {
        let index = self
            .bills
            .iter()
            .position(|bill| bill.id == id)
            .ok_or(CoreError::BillNotFound(id))?;
        let removed = self.bills.remove(index);
        self.persist()?;
        debug!(id, "bill removed");
        Ok(removed)
    }

    /// Convenience for a status-only patch to `Paid`.
    pub fn mark_paid(&mut self, id: u64) -> Result<(), CoreError> {
        self.update(id, BillPatch::status(BillStatus::Paid))
    }

    /// Next id without advancing the watermark; `add`/`add_series` advance
    /// it past whatever ids they actually store. Ids derive from the creation
    /// timestamp in milliseconds, with `last_id + 1` as the floor so two
    /// submissions in the same millisecond still get distinct, monotonic ids.
    fn peek_id_base(&self) -> u64 {
        let millis = self.clock.now().timestamp_millis().max(0) as u64;
        millis.max(self.last_id + 1)
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.storage.save(&self.bills)
    }
}

//! Draft validation for the bill entry form.
//!
//! Validation failures are data, not errors: the result carries a mapping
//! from form field to human-readable message, and the session continues.

use billfold_domain::{parse_date, BillDraft, BillStatus, Frequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Field-keyed validation messages for a bill draft.
///
/// The three keys mirror the entry form. Recurring-series problems are
/// reported under `due_date`, matching the form's grouping of both date
/// inputs under one error slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub due_date: Option<String>,
}

impl FieldErrors {
    /// A draft is acceptable for submission iff no field carries an error.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.due_date.is_none()
    }

    /// `(field, message)` pairs for display, in form order.
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(message) = &self.description {
            out.push(("description", message.as_str()));
        }
        if let Some(message) = &self.amount {
            out.push(("amount", message.as_str()));
        }
        if let Some(message) = &self.due_date {
            out.push(("due date", message.as_str()));
        }
        out
    }
}

/// A draft that passed validation, with dates and amount already parsed so
/// downstream code never re-parses user input.
#[derive(Debug, Clone)]
pub struct ValidatedBill {
    pub origin: Option<u64>,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub recurring: bool,
    pub frequency: Frequency,
    pub series_end: Option<NaiveDate>,
}

/// Checks a draft against the entry-form rules.
pub fn validate(draft: &BillDraft) -> Result<ValidatedBill, FieldErrors> {
    let mut errors = FieldErrors::default();

    let description = draft.description.trim();
    if description.is_empty() {
        errors.description = Some("Description is required".into());
    }

    let amount = match draft.amount {
        Some(value) if value > Decimal::ZERO => Some(value),
        _ => {
            errors.amount = Some("Amount must be greater than zero".into());
            None
        }
    };

    let due_date = if draft.due_date.trim().is_empty() {
        errors.due_date = Some("Due date is required".into());
        None
    } else {
        match parse_date(&draft.due_date) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.due_date = Some("Due date is not a valid date".into());
                None
            }
        }
    };

    let mut series_end = None;
    if draft.recurring {
        if draft.series_end.trim().is_empty() {
            errors.due_date = Some("End date is required for recurring bills".into());
        } else {
            match parse_date(&draft.series_end) {
                Ok(end) => {
                    if due_date.is_some_and(|due| end < due) {
                        errors.due_date =
                            Some("End date must not be before the due date".into());
                    } else {
                        series_end = Some(end);
                    }
                }
                Err(_) => {
                    errors.due_date = Some("End date is not a valid date".into());
                }
            }
        }
    }

    match (amount, due_date) {
        (Some(amount), Some(due_date)) if errors.is_empty() => Ok(ValidatedBill {
            origin: draft.origin,
            description: description.to_string(),
            amount,
            due_date,
            status: draft.status,
            recurring: draft.recurring,
            frequency: draft.frequency,
            series_end,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BillDraft {
        BillDraft {
            description: "Electricity".into(),
            amount: Some("150.00".parse().unwrap()),
            due_date: "2024-01-31".into(),
            ..BillDraft::default()
        }
    }

    #[test]
    fn accepts_a_complete_single_draft() {
        let validated = validate(&draft()).expect("draft should validate");
        assert_eq!(validated.description, "Electricity");
        assert_eq!(validated.due_date.to_string(), "2024-01-31");
        assert_eq!(validated.series_end, None);
    }

    #[test]
    fn blank_description_is_reported() {
        let mut bad = draft();
        bad.description = "   ".into();
        let errors = validate(&bad).unwrap_err();
        assert!(errors.description.is_some());
        assert!(errors.amount.is_none() && errors.due_date.is_none());
    }

    #[test]
    fn non_positive_amounts_are_reported() {
        for amount in [None, Some(Decimal::ZERO), Some("-3.50".parse().unwrap())] {
            let mut bad = draft();
            bad.amount = amount;
            let errors = validate(&bad).unwrap_err();
            assert!(errors.amount.is_some(), "amount {amount:?} should fail");
        }
    }

    #[test]
    fn missing_or_malformed_due_date_is_reported() {
        for raw in ["", "31/01/2024", "2024-02-30"] {
            let mut bad = draft();
            bad.due_date = raw.into();
            let errors = validate(&bad).unwrap_err();
            assert!(errors.due_date.is_some(), "due date `{raw}` should fail");
        }
    }

    #[test]
    fn recurring_draft_requires_an_end_date_on_the_due_date_field() {
        let mut bad = draft();
        bad.recurring = true;
        let errors = validate(&bad).unwrap_err();
        assert_eq!(
            errors.due_date.as_deref(),
            Some("End date is required for recurring bills")
        );
        assert!(errors.description.is_none() && errors.amount.is_none());
    }

    #[test]
    fn end_date_before_due_date_is_rejected() {
        let mut bad = draft();
        bad.recurring = true;
        bad.series_end = "2024-01-30".into();
        let errors = validate(&bad).unwrap_err();
        assert_eq!(
            errors.due_date.as_deref(),
            Some("End date must not be before the due date")
        );
    }

    #[test]
    fn end_date_equal_to_due_date_is_accepted() {
        let mut ok = draft();
        ok.recurring = true;
        ok.series_end = "2024-01-31".into();
        let validated = validate(&ok).expect("single-occurrence series validates");
        assert_eq!(validated.series_end, Some(validated.due_date));
    }

    #[test]
    fn several_failures_are_reported_together() {
        let bad = BillDraft::default();
        let errors = validate(&bad).unwrap_err();
        assert!(errors.description.is_some());
        assert!(errors.amount.is_some());
        assert!(errors.due_date.is_some());
        assert_eq!(errors.messages().len(), 3);
    }
}

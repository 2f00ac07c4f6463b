//! Expansion of recurring drafts into concrete bill instances.

use billfold_domain::{shift_month, shift_year, Bill, BillStatus, Frequency};

use crate::{validate::ValidatedBill, CoreError};

/// Defensive horizon for a single series: a century of monthly bills.
/// The loop counter is the bound, so expansion terminates even if the date
/// stepper misbehaves.
pub const MAX_OCCURRENCES: usize = 1200;

/// Materializes a recurring template into one instance per occurrence.
///
/// Occurrence `k` is the template's due date shifted by `k` months or years.
/// Shifting always starts from the anchor date, so a series anchored on the
/// 31st clamps to the 29th/30th in shorter months and returns to the 31st in
/// longer ones. Instances receive consecutive ids starting at `id_base` and
/// all begin `Pending`.
///
/// The sequence contains every occurrence `<= series_end` and is non-empty
/// whenever the due date itself qualifies; a template whose series ends
/// before its first due date is an [`CoreError::EmptySeries`] rather than a
/// silent zero-bill expansion.
pub fn expand(template: &ValidatedBill, id_base: u64) -> Result<Vec<Bill>, CoreError> {
    let end = template.series_end.ok_or_else(|| {
        CoreError::Validation("recurring template has no series end date".into())
    })?;
    if template.due_date > end {
        return Err(CoreError::EmptySeries);
    }

    let mut instances = Vec::new();
    for index in 0..MAX_OCCURRENCES {
        let due_date = match template.frequency {
            Frequency::Monthly => shift_month(template.due_date, index as i32),
            Frequency::Annual => shift_year(template.due_date, index as i32),
        };
        if due_date > end {
            return Ok(instances);
        }
        instances.push(Bill {
            id: id_base + index as u64,
            description: template.description.clone(),
            amount: template.amount,
            due_date,
            status: BillStatus::Pending,
            recurring: true,
            frequency: template.frequency,
            series_end: Some(end),
        });
    }
    Err(CoreError::RecurrenceOverflow {
        cap: MAX_OCCURRENCES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_domain::parse_date;

    fn template(due: &str, frequency: Frequency, end: &str) -> ValidatedBill {
        ValidatedBill {
            origin: None,
            description: "Electricity".into(),
            amount: "150.00".parse().unwrap(),
            due_date: parse_date(due).unwrap(),
            status: BillStatus::Pending,
            recurring: true,
            frequency,
            series_end: Some(parse_date(end).unwrap()),
        }
    }

    #[test]
    fn monthly_series_clamps_month_ends_without_drifting() {
        let bills = expand(
            &template("2024-01-31", Frequency::Monthly, "2024-04-30"),
            1000,
        )
        .expect("expansion succeeds");
        let dates: Vec<String> = bills.iter().map(|b| b.due_date.to_string()).collect();
        assert_eq!(
            dates,
            ["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30"]
        );
        assert!(bills.iter().all(|b| b.status == BillStatus::Pending));
        let ids: Vec<u64> = bills.iter().map(|b| b.id).collect();
        assert_eq!(ids, [1000, 1001, 1002, 1003]);
    }

    #[test]
    fn due_dates_strictly_increase() {
        let bills = expand(
            &template("2023-05-15", Frequency::Monthly, "2025-05-15"),
            1,
        )
        .expect("expansion succeeds");
        assert_eq!(bills.len(), 25);
        assert!(bills.windows(2).all(|pair| pair[0].due_date < pair[1].due_date));
    }

    #[test]
    fn annual_series_steps_by_year() {
        let bills = expand(
            &template("2024-02-29", Frequency::Annual, "2028-03-01"),
            1,
        )
        .expect("expansion succeeds");
        let dates: Vec<String> = bills.iter().map(|b| b.due_date.to_string()).collect();
        assert_eq!(
            dates,
            [
                "2024-02-29",
                "2025-02-28",
                "2026-02-28",
                "2027-02-28",
                "2028-02-29"
            ]
        );
    }

    #[test]
    fn series_ending_on_the_first_due_date_yields_one_instance() {
        let bills = expand(
            &template("2024-01-31", Frequency::Monthly, "2024-01-31"),
            1,
        )
        .expect("expansion succeeds");
        assert_eq!(bills.len(), 1);
    }

    #[test]
    fn series_ending_before_the_due_date_is_an_error() {
        let err = expand(
            &template("2024-01-31", Frequency::Monthly, "2024-01-01"),
            1,
        )
        .expect_err("empty window must not silently produce zero bills");
        assert!(matches!(err, CoreError::EmptySeries));
    }

    #[test]
    fn pathological_horizons_hit_the_occurrence_cap() {
        let err = expand(
            &template("2024-01-01", Frequency::Monthly, "2300-01-01"),
            1,
        )
        .expect_err("expansion past the horizon should fail");
        assert!(matches!(err, CoreError::RecurrenceOverflow { .. }));
    }

    #[test]
    fn instances_share_the_series_metadata() {
        let bills = expand(
            &template("2024-01-10", Frequency::Monthly, "2024-03-10"),
            1,
        )
        .expect("expansion succeeds");
        let end = parse_date("2024-03-10").ok();
        for bill in &bills {
            assert_eq!(bill.description, "Electricity");
            assert_eq!(bill.amount, "150.00".parse().unwrap());
            assert_eq!(bill.frequency, Frequency::Monthly);
            assert_eq!(bill.series_end, end);
            assert!(bill.recurring);
        }
    }
}

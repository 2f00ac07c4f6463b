//! Interactive entry form for bill drafts.
//!
//! The form collects raw input only; all rules live in the core validator,
//! so a malformed date or amount comes back as a field error rather than a
//! prompt-level failure.

use billfold_domain::{BillDraft, BillStatus, Frequency};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;

const STATUSES: [BillStatus; 3] = [BillStatus::Pending, BillStatus::Paid, BillStatus::Overdue];
const FREQUENCIES: [Frequency; 2] = [Frequency::Monthly, Frequency::Annual];

/// Prompts for every bill field, pre-filled from `draft` when editing.
pub fn bill_form(
    theme: &ColorfulTheme,
    mut draft: BillDraft,
) -> Result<BillDraft, dialoguer::Error> {
    draft.description = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(draft.description.as_str())
        .allow_empty(true)
        .interact_text()?;

    let amount_raw: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .with_initial_text(
            draft
                .amount
                .map(|amount| amount.to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;
    draft.amount = amount_raw.trim().parse::<Decimal>().ok();

    draft.due_date = Input::with_theme(theme)
        .with_prompt("Due date (YYYY-MM-DD)")
        .with_initial_text(draft.due_date.as_str())
        .allow_empty(true)
        .interact_text()?;

    let status_labels: Vec<String> = STATUSES.iter().map(|status| status.to_string()).collect();
    let current_status = STATUSES
        .iter()
        .position(|status| *status == draft.status)
        .unwrap_or(0);
    let chosen = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&status_labels)
        .default(current_status)
        .interact()?;
    draft.status = STATUSES[chosen];

    draft.recurring = Confirm::with_theme(theme)
        .with_prompt("Recurring bill?")
        .default(draft.recurring)
        .interact()?;

    if draft.recurring {
        let frequency_labels: Vec<String> =
            FREQUENCIES.iter().map(|freq| freq.to_string()).collect();
        let current_frequency = FREQUENCIES
            .iter()
            .position(|freq| *freq == draft.frequency)
            .unwrap_or(0);
        let chosen = Select::with_theme(theme)
            .with_prompt("Frequency")
            .items(&frequency_labels)
            .default(current_frequency)
            .interact()?;
        draft.frequency = FREQUENCIES[chosen];

        draft.series_end = Input::with_theme(theme)
            .with_prompt("Repeats until (YYYY-MM-DD)")
            .with_initial_text(draft.series_end.as_str())
            .allow_empty(true)
            .interact_text()?;
    } else {
        draft.series_end.clear();
    }

    Ok(draft)
}

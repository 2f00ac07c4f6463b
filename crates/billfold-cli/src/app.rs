//! Month-view loop: renders the bill list and forwards user intents into
//! the core store operations.

use billfold_core::{
    month_view, BillStore, CoreError, MonthView, StatusFilter, SubmitOutcome,
};
use billfold_domain::{format_date, Bill, BillDraft, BillStatus, MonthWindow};
use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use thiserror::Error;

use crate::{forms, output};

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Interaction(#[from] dialoguer::Error),
}

const ACTIONS: [&str; 8] = [
    "Previous month",
    "Next month",
    "Add bill",
    "Mark a bill paid",
    "Edit a bill",
    "Delete a bill",
    "Change status filter",
    "Quit",
];

pub struct App {
    store: BillStore,
    window: MonthWindow,
    filter: StatusFilter,
    theme: ColorfulTheme,
}

impl App {
    pub fn new(store: BillStore, today: NaiveDate, theme: ColorfulTheme) -> Self {
        Self {
            store,
            window: MonthWindow::containing(today),
            filter: StatusFilter::Any,
            theme,
        }
    }

    pub fn run(mut self) -> Result<(), CliError> {
        loop {
            self.render();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Action")
                .items(&ACTIONS)
                .default(0)
                .interact()?;
            match choice {
                0 => self.window = self.window.prev(),
                1 => self.window = self.window.next(),
                2 => self.add_bill()?,
                3 => self.mark_paid()?,
                4 => self.edit_bill()?,
                5 => self.delete_bill()?,
                6 => self.change_filter()?,
                _ => return Ok(()),
            }
        }
    }

    fn render(&self) {
        let view = month_view(self.store.bills(), self.window, self.filter);
        output::section(&view.label);
        println!("  Total:   {}", format!("{:.2}", view.totals.total).bold());
        println!(
            "  Pending: {}",
            format!("{:.2}", view.totals.pending).yellow()
        );
        println!("  Paid:    {}", format!("{:.2}", view.totals.paid).green());

        self.render_group(&view, "Open bills", |status| {
            matches!(status, BillStatus::Pending | BillStatus::Overdue)
        });
        self.render_group(&view, "Paid bills", |status| {
            matches!(status, BillStatus::Paid)
        });
    }

    fn render_group(&self, view: &MonthView<'_>, title: &str, belongs: fn(BillStatus) -> bool) {
        println!();
        println!("{}", title.bold());
        let mut empty = true;
        for bill in view
            .bills
            .iter()
            .filter(|bill| belongs(bill.status))
            .filter(|bill| self.filter.matches(bill.status))
        {
            empty = false;
            println!("  {}", describe(bill));
        }
        if empty {
            println!("  (none)");
        }
    }

    fn add_bill(&mut self) -> Result<(), CliError> {
        let draft = forms::bill_form(&self.theme, BillDraft::default())?;
        self.submit(&draft)
    }

    fn edit_bill(&mut self) -> Result<(), CliError> {
        let Some(id) = self.choose_bill("Edit which bill?", |_| true)? else {
            return Ok(());
        };
        let Some(bill) = self.store.get(id) else {
            return Ok(());
        };
        let draft = forms::bill_form(&self.theme, BillDraft::edit_of(bill))?;
        self.submit(&draft)
    }

    fn mark_paid(&mut self) -> Result<(), CliError> {
        let Some(id) = self.choose_bill("Mark which bill as paid?", |status| {
            matches!(status, BillStatus::Pending | BillStatus::Overdue)
        })?
        else {
            return Ok(());
        };
        let result = self.store.mark_paid(id);
        self.report(result.map(|()| "Marked as paid.".to_string()))
    }

    fn delete_bill(&mut self) -> Result<(), CliError> {
        let Some(id) = self.choose_bill("Delete which bill?", |_| true)? else {
            return Ok(());
        };
        let description = self
            .store
            .get(id)
            .map(|bill| bill.description.clone())
            .unwrap_or_default();
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "Delete \"{description}\"? This cannot be undone."
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
        let result = self.store.remove(id);
        self.report(result.map(|removed| format!("Deleted \"{}\".", removed.description)))
    }

    fn change_filter(&mut self) -> Result<(), CliError> {
        const FILTERS: [StatusFilter; 4] = [
            StatusFilter::Any,
            StatusFilter::Only(BillStatus::Pending),
            StatusFilter::Only(BillStatus::Paid),
            StatusFilter::Only(BillStatus::Overdue),
        ];
        let labels = ["All statuses", "Pending", "Paid", "Overdue"];
        let current = FILTERS
            .iter()
            .position(|filter| *filter == self.filter)
            .unwrap_or(0);
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Show")
            .items(&labels)
            .default(current)
            .interact()?;
        self.filter = FILTERS[choice];
        Ok(())
    }

    /// Validates and stores the draft, reporting the outcome.
    fn submit(&mut self, draft: &BillDraft) -> Result<(), CliError> {
        match self.store.submit(draft) {
            Ok(SubmitOutcome::Created(_)) => {
                output::success("Bill added.");
                Ok(())
            }
            Ok(SubmitOutcome::CreatedSeries(ids)) => {
                output::success(format!("{} bills scheduled.", ids.len()));
                Ok(())
            }
            Ok(SubmitOutcome::Updated(_)) => {
                output::success("Bill updated.");
                Ok(())
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                for (field, message) in errors.messages() {
                    output::error(format!("{field}: {message}"));
                }
                Ok(())
            }
            Err(err) => self.report::<String>(Err(err)),
        }
    }

    /// Prints the success message, or maps a recoverable core error onto the
    /// session: stale ids refresh the view, persistence failures warn that
    /// changes may not survive a restart.
    fn report<T: std::fmt::Display>(&self, result: Result<T, CoreError>) -> Result<(), CliError> {
        match result {
            Ok(message) => {
                output::success(message);
                Ok(())
            }
            Err(CoreError::BillNotFound(id)) => {
                output::error(format!("Bill {id} no longer exists; the list was refreshed."));
                Ok(())
            }
            Err(CoreError::Storage(message)) | Err(CoreError::Serde(message)) => {
                output::warning(format!(
                    "Saved in memory only ({message}); changes may not survive a restart."
                ));
                Ok(())
            }
            Err(CoreError::Io(err)) => {
                output::warning(format!(
                    "Saved in memory only ({err}); changes may not survive a restart."
                ));
                Ok(())
            }
            Err(err) => {
                output::error(err.to_string());
                Ok(())
            }
        }
    }

    /// Select one of the current month's bills matching `eligible`.
    fn choose_bill(
        &self,
        prompt: &str,
        eligible: fn(BillStatus) -> bool,
    ) -> Result<Option<u64>, CliError> {
        let candidates: Vec<&Bill> = month_view(self.store.bills(), self.window, self.filter)
            .bills
            .into_iter()
            .filter(|bill| eligible(bill.status))
            .collect();
        if candidates.is_empty() {
            output::info("No matching bills in this month.");
            return Ok(None);
        }
        let items: Vec<String> = candidates.iter().map(|bill| describe(bill)).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(Some(candidates[choice].id))
    }
}

fn describe(bill: &Bill) -> String {
    let status = match bill.status {
        BillStatus::Pending => bill.status.to_string().yellow(),
        BillStatus::Paid => bill.status.to_string().green(),
        BillStatus::Overdue => bill.status.to_string().red(),
    };
    let mut line = format!(
        "{} {:.2} due {} [{}]",
        bill.description,
        bill.amount,
        format_date(bill.due_date),
        status
    );
    if bill.recurring {
        let frequency = bill.frequency.to_string().to_lowercase();
        match bill.series_end {
            Some(end) => {
                line.push_str(&format!(" ({frequency} until {})", format_date(end)));
            }
            None => line.push_str(&format!(" ({frequency})")),
        }
    }
    line
}

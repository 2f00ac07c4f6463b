//! Month-window filtering and status aggregation for the bill list.

use billfold_domain::{Bill, BillStatus, MonthWindow};
use rust_decimal::Decimal;

/// Status filter applied to the headline total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(BillStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BillStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Exact decimal totals for one month window.
///
/// `total` honors the status filter; `pending` and `paid` are always the
/// unfiltered sums of their status within the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotals {
    pub total: Decimal,
    pub pending: Decimal,
    pub paid: Decimal,
}

/// The view model handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    pub window: MonthWindow,
    pub label: String,
    pub bills: Vec<&'a Bill>,
    pub totals: MonthTotals,
}

/// Bills whose due date falls in the window. Pure and order preserving.
pub fn bills_for_month(bills: &[Bill], window: MonthWindow) -> Vec<&Bill> {
    bills
        .iter()
        .filter(|bill| window.contains(bill.due_date))
        .collect()
}

/// Sums the month's bills; see [`MonthTotals`] for filter semantics.
pub fn aggregate(bills: &[&Bill], filter: StatusFilter) -> MonthTotals {
    let mut totals = MonthTotals {
        total: Decimal::ZERO,
        pending: Decimal::ZERO,
        paid: Decimal::ZERO,
    };
    for bill in bills {
        if filter.matches(bill.status) {
            totals.total += bill.amount;
        }
        match bill.status {
            BillStatus::Pending => totals.pending += bill.amount,
            BillStatus::Paid => totals.paid += bill.amount,
            BillStatus::Overdue => {}
        }
    }
    totals
}

/// Filters and aggregates in one step.
pub fn month_view(bills: &[Bill], window: MonthWindow, filter: StatusFilter) -> MonthView<'_> {
    let in_month = bills_for_month(bills, window);
    let totals = aggregate(&in_month, filter);
    MonthView {
        window,
        label: window.label(),
        bills: in_month,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use billfold_domain::Frequency;

    use super::*;

    fn bill(id: u64, due: &str, amount: &str, status: BillStatus) -> Bill {
        Bill {
            id,
            description: format!("bill-{id}"),
            amount: amount.parse().unwrap(),
            due_date: due.parse().unwrap(),
            status,
            recurring: false,
            frequency: Frequency::Monthly,
            series_end: None,
        }
    }

    fn january_mix() -> Vec<Bill> {
        vec![
            bill(1, "2024-01-05", "100.10", BillStatus::Pending),
            bill(2, "2024-01-15", "200.20", BillStatus::Paid),
            bill(3, "2024-01-25", "50.05", BillStatus::Overdue),
            bill(4, "2024-02-01", "999.99", BillStatus::Pending),
            bill(5, "2023-01-05", "999.99", BillStatus::Paid),
        ]
    }

    #[test]
    fn month_filter_keeps_only_the_window() {
        let bills = january_mix();
        let january = bills_for_month(&bills, MonthWindow::new(2024, 1));
        let ids: Vec<u64> = january.iter().map(|bill| bill.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn month_filter_is_idempotent_and_order_preserving() {
        let bills = january_mix();
        let window = MonthWindow::new(2024, 1);
        let once: Vec<Bill> = bills_for_month(&bills, window)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Bill> = bills_for_month(&once, window)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn totals_partition_by_status_under_any() {
        let bills = january_mix();
        let january = bills_for_month(&bills, MonthWindow::new(2024, 1));
        let totals = aggregate(&january, StatusFilter::Any);
        let overdue: Decimal = january
            .iter()
            .filter(|bill| bill.status == BillStatus::Overdue)
            .map(|bill| bill.amount)
            .sum();
        assert_eq!(totals.total, totals.pending + totals.paid + overdue);
        assert_eq!(totals.total, "350.35".parse().unwrap());
    }

    #[test]
    fn status_filter_narrows_the_headline_total_only() {
        let bills = january_mix();
        let january = bills_for_month(&bills, MonthWindow::new(2024, 1));
        let totals = aggregate(&january, StatusFilter::Only(BillStatus::Paid));
        assert_eq!(totals.total, "200.20".parse().unwrap());
        // Pending and paid sums ignore the filter.
        assert_eq!(totals.pending, "100.10".parse().unwrap());
        assert_eq!(totals.paid, "200.20".parse().unwrap());
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        let bills: Vec<Bill> = (0..10)
            .map(|i| bill(i + 1, "2024-01-05", "0.10", BillStatus::Pending))
            .collect();
        let january = bills_for_month(&bills, MonthWindow::new(2024, 1));
        let totals = aggregate(&january, StatusFilter::Any);
        assert_eq!(totals.total, "1.00".parse().unwrap());
    }

    #[test]
    fn view_model_carries_the_month_label() {
        let bills = january_mix();
        let view = month_view(&bills, MonthWindow::new(2024, 1), StatusFilter::Any);
        assert_eq!(view.label, "January 2024");
        assert_eq!(view.bills.len(), 3);
    }
}

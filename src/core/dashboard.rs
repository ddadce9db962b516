//! Farm-wide dashboard aggregation across all batches and the inventory.

use crate::{
    core::{batch::BatchRecord, metrics},
    entities::{InventoryCategory, TransactionKind, inventory_item},
};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Headline numbers for the whole farm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmDashboard {
    /// Batches whose status is active
    pub active_batches: usize,
    /// Income across all batches
    pub total_income: f64,
    /// Expense transactions across all batches (chick purchases excluded)
    pub total_expenses: f64,
    /// Sum of every batch's net profit (chick purchases included)
    pub net_profit: f64,
    /// Expenses dated in the calendar month of `now`
    pub monthly_costs: f64,
    /// Quantity of feed-category stock on hand
    pub feed_stock: f64,
    /// Items at or below their threshold
    pub low_stock_items: usize,
}

/// Aggregates every batch and the inventory into a dashboard at `now`.
#[must_use]
pub fn compute_dashboard(
    records: &[BatchRecord],
    inventory: &[inventory_item::Model],
    now: DateTime<Utc>,
) -> FarmDashboard {
    let today = now.date_naive();
    let mut dashboard = FarmDashboard {
        active_batches: records.iter().filter(|r| r.is_active()).count(),
        total_income: 0.0,
        total_expenses: 0.0,
        net_profit: 0.0,
        monthly_costs: 0.0,
        feed_stock: 0.0,
        low_stock_items: inventory.iter().filter(|i| i.is_low_stock()).count(),
    };

    for record in records {
        let batch_metrics = metrics::compute_metrics(record, now);
        dashboard.total_income += batch_metrics.total_income;
        dashboard.total_expenses += batch_metrics.total_expenses;
        dashboard.net_profit += batch_metrics.net_profit;

        dashboard.monthly_costs += record
            .transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense)
            .filter(|txn| txn.date.year() == today.year() && txn.date.month() == today.month())
            .map(|txn| metrics::finite_or_zero(txn.amount))
            .sum::<f64>();
    }

    dashboard.feed_stock = inventory
        .iter()
        .filter(|item| item.category == InventoryCategory::Feed)
        .map(|item| metrics::finite_or_zero(item.quantity))
        .sum();

    dashboard
}

//! Metrics engine - Derives batch KPIs from a batch's logs and transactions.
//!
//! Everything here is a pure function of `(record, now)`: no database, no clock,
//! no mutation of the inputs. The functions are total. Empty collections, a zero
//! `initial_count`, NaN or infinite stored values, and start dates in the future
//! all produce a well-defined snapshot, with the affected metric degraded to `0`.

use crate::{
    core::batch::BatchRecord,
    entities::{TransactionKind, daily_log},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Grams per kilogram, for converting logged average weights
const GRAMS_PER_KG: f64 = 1000.0;

/// Read-only snapshot of a batch's derived KPIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchMetrics {
    /// Whole days since placement, never negative
    pub age_days: i64,
    /// Sum of logged deaths
    pub total_mortality: i64,
    /// Birds placed minus deaths; may be negative if mortality was over-reported
    pub current_count: i64,
    /// Set when `current_count` is negative
    pub data_anomaly: bool,
    /// Deaths as a percentage of birds placed, 2 decimals
    pub mortality_rate_percent: f64,
    /// Sum of logged feed, kg
    pub total_feed_consumed_kg: f64,
    /// Average weight from the latest log, kg
    pub latest_avg_weight_kg: f64,
    /// `current_count * latest_avg_weight_kg`
    pub estimated_biomass_kg: f64,
    /// Feed per kilogram of live weight, 2 decimals
    pub feed_conversion_ratio: f64,
    /// Sum of expense transactions
    pub total_expenses: f64,
    /// Sum of income transactions
    pub total_income: f64,
    /// Chick purchase cost from the batch header
    pub birds_cost: f64,
    /// Expenses plus chick purchase
    pub total_cost: f64,
    /// Income minus total cost
    pub net_profit: f64,
    /// Net profit as a percentage of income, 2 decimals
    pub profit_margin_percent: f64,
    /// Total cost per bird placed
    pub cost_per_bird: f64,
}

/// Replaces NaN and infinities with `0.0`.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Rounds to 2 decimal places, half away from zero. Non-finite input yields `0.0`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    finite_or_zero((value * 100.0).round() / 100.0)
}

/// `numerator / denominator`, or `0.0` when the denominator is not positive.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        finite_or_zero(numerator / denominator)
    } else {
        0.0
    }
}

/// Whole days from `start_date` to the UTC calendar date of `now`, floored at zero.
#[must_use]
pub fn age_days(start_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    now.date_naive()
        .signed_duration_since(start_date)
        .num_days()
        .max(0)
}

/// The most recent log: greatest `date`, ties going to the one appended last.
#[must_use]
pub fn latest_log(logs: &[daily_log::Model]) -> Option<&daily_log::Model> {
    logs.iter().max_by_key(|log| log.date)
}

fn sum_by_kind(record: &BatchRecord, kind: TransactionKind) -> f64 {
    finite_or_zero(
        record
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| finite_or_zero(txn.amount))
            .sum(),
    )
}

/// Computes the KPI snapshot of a batch at `now`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // bird counts are far below 2^52
pub fn compute_metrics(record: &BatchRecord, now: DateTime<Utc>) -> BatchMetrics {
    let batch = &record.batch;

    let total_mortality = record
        .logs
        .iter()
        .fold(0_i64, |acc, log| acc.saturating_add(log.mortality));
    let current_count = batch.initial_count.saturating_sub(total_mortality);
    let initial_count = batch.initial_count as f64;

    let mortality_rate_percent = round2(ratio(total_mortality as f64, initial_count) * 100.0);

    let total_feed_consumed_kg = finite_or_zero(
        record
            .logs
            .iter()
            .map(|log| finite_or_zero(log.feed_consumed))
            .sum(),
    );

    let latest_avg_weight_kg = latest_log(&record.logs)
        .map_or(0.0, |log| finite_or_zero(log.avg_weight) / GRAMS_PER_KG);
    let estimated_biomass_kg = finite_or_zero(current_count as f64 * latest_avg_weight_kg);
    let feed_conversion_ratio = round2(ratio(total_feed_consumed_kg, estimated_biomass_kg));

    let total_expenses = sum_by_kind(record, TransactionKind::Expense);
    let total_income = sum_by_kind(record, TransactionKind::Income);
    let birds_cost = finite_or_zero(initial_count * finite_or_zero(batch.initial_cost));
    let total_cost = finite_or_zero(total_expenses + birds_cost);
    let net_profit = finite_or_zero(total_income - total_cost);

    BatchMetrics {
        age_days: age_days(batch.start_date, now),
        total_mortality,
        current_count,
        data_anomaly: current_count < 0,
        mortality_rate_percent,
        total_feed_consumed_kg,
        latest_avg_weight_kg,
        estimated_biomass_kg,
        feed_conversion_ratio,
        total_expenses,
        total_income,
        birds_cost,
        total_cost,
        net_profit,
        profit_margin_percent: round2(ratio(net_profit, total_income) * 100.0),
        cost_per_bird: ratio(total_cost, initial_count),
    }
}

//! Report formatting.
//!
//! Turns metrics, alerts, and dashboards into plain text. All functions are pure and
//! framework-agnostic; the bot layer wraps the output in code blocks or embeds.

use crate::{
    core::{alerts::{Alert, AlertKind}, dashboard::FarmDashboard, metrics::BatchMetrics},
    entities::{TransactionKind, batch, transaction},
};
use std::fmt::Write;

/// Formats money with two decimals and thousands separators, e.g. `-1,234.50`.
#[must_use]
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Formats a transaction amount with a sign from its kind, e.g. `+50.00` or `-25.50`.
#[must_use]
pub fn format_transaction_amount(kind: TransactionKind, amount: f64) -> String {
    match kind {
        TransactionKind::Income => format!("+{}", format_money(amount)),
        TransactionKind::Expense => format!("-{}", format_money(amount)),
    }
}

/// One-line summary of a transaction.
#[must_use]
pub fn format_transaction_summary(txn: &transaction::Model) -> String {
    let amount = format_transaction_amount(txn.kind, txn.amount);
    let notes = txn.notes.as_deref().unwrap_or("");
    format!("{} | {amount} | {} | {notes}", txn.date, txn.category.label())
        .trim_end_matches([' ', '|'])
        .to_string()
}

/// Multi-line KPI summary of a batch.
pub fn format_metrics_summary(
    batch: &batch::Model,
    metrics: &BatchMetrics,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({}, {}) - day {}",
        batch.name,
        batch.breed,
        batch.status.label(),
        metrics.age_days
    )?;
    writeln!(
        out,
        "Birds:      {} of {} placed ({} dead, {:.2}%)",
        metrics.current_count,
        batch.initial_count,
        metrics.total_mortality,
        metrics.mortality_rate_percent
    )?;
    if metrics.data_anomaly {
        writeln!(out, "Warning:    logged deaths exceed birds placed")?;
    }
    writeln!(
        out,
        "Feed:       {:.1} kg, avg weight {:.3} kg, biomass {:.1} kg",
        metrics.total_feed_consumed_kg,
        metrics.latest_avg_weight_kg,
        metrics.estimated_biomass_kg
    )?;
    writeln!(out, "FCR:        {:.2}", metrics.feed_conversion_ratio)?;
    writeln!(
        out,
        "Costs:      {} (chicks {}, expenses {})",
        format_money(metrics.total_cost),
        format_money(metrics.birds_cost),
        format_money(metrics.total_expenses)
    )?;
    writeln!(out, "Income:     {}", format_money(metrics.total_income))?;
    write!(
        out,
        "Net profit: {} (margin {:.2}%, cost/bird {})",
        format_money(metrics.net_profit),
        metrics.profit_margin_percent,
        format_money(metrics.cost_per_bird)
    )?;
    Ok(out)
}

/// Alert line with a leading marker by kind.
#[must_use]
pub fn format_alert(alert: &Alert) -> String {
    let marker = match alert.kind() {
        AlertKind::Stock => "⚠️",
        AlertKind::Vaccine => "💉",
        AlertKind::Info => "ℹ️",
    };
    format!("{marker} {}", alert.message())
}

/// Multi-line farm dashboard.
pub fn format_dashboard(dashboard: &FarmDashboard) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Active batches: {}", dashboard.active_batches)?;
    writeln!(out, "Income:         {}", format_money(dashboard.total_income))?;
    writeln!(out, "Expenses:       {}", format_money(dashboard.total_expenses))?;
    writeln!(out, "Net profit:     {}", format_money(dashboard.net_profit))?;
    writeln!(out, "Costs (month):  {}", format_money(dashboard.monthly_costs))?;
    writeln!(out, "Feed stock:     {:.1}", dashboard.feed_stock)?;
    write!(out, "Low stock:      {} item(s)", dashboard.low_stock_items)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::metrics::compute_metrics;
    use crate::test_utils::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(5.5), "5.50");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-2500.0), "-2,500.00");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_transaction_amount() {
        assert_eq!(format_transaction_amount(TransactionKind::Income, 50.0), "+50.00");
        assert_eq!(format_transaction_amount(TransactionKind::Expense, 25.5), "-25.50");
    }

    #[test]
    fn test_format_transaction_summary_without_notes() {
        let txn = sample_transaction(1, TransactionKind::Expense, 12.0);
        let line = format_transaction_summary(&txn);
        assert!(line.ends_with("feed"));
        assert!(line.contains("-12.00"));
    }

    #[test]
    fn test_format_metrics_summary_mentions_key_figures() {
        let now = utc_noon(2024, 5, 20);
        let start = now.date_naive();
        let mut record = sample_record(1000, 2.5, start);
        record.logs.push(sample_log(1, start, 20, 150.0, 800.0));

        let metrics = compute_metrics(&record, now);
        let text = format_metrics_summary(&record.batch, &metrics).unwrap();
        assert!(text.contains("980 of 1000"));
        assert!(text.contains("2.00%"));
        assert!(text.contains("FCR:        0.19"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_format_metrics_summary_warns_on_anomaly() {
        let now = utc_noon(2024, 5, 20);
        let start = now.date_naive();
        let mut record = sample_record(5, 1.0, start);
        record.logs.push(sample_log(1, start, 9, 1.0, 100.0));

        let metrics = compute_metrics(&record, now);
        let text = format_metrics_summary(&record.batch, &metrics).unwrap();
        assert!(text.contains("Warning"));
    }

    #[test]
    fn test_format_alert_marker() {
        let alert = Alert::VaccineDueToday {
            vaccine: "LaSota".to_string(),
            age_days: 18,
        };
        assert_eq!(format_alert(&alert), "💉 Vaccinate today (day 18): LaSota");
    }

    #[test]
    fn test_format_dashboard() {
        let dashboard = crate::core::dashboard::compute_dashboard(&[], &[], utc_noon(2024, 1, 1));
        let text = format_dashboard(&dashboard).unwrap();
        assert!(text.starts_with("Active batches: 0"));
        assert!(text.ends_with("0 item(s)"));
    }
}

//! Alert engine - Low-stock and vaccination alerts for display.
//!
//! Alerts are recomputed from scratch on every call and never stored, so calling
//! [`compute_alerts`] twice with the same inputs yields the same list. Deciding
//! whether the user has already seen an alert is the caller's job.
//!
//! Ordering: stock alerts in inventory order, then the due-today vaccine alert,
//! then the due-tomorrow alert.

use crate::{
    config::schedule::VaccineSchedule,
    core::{batch::BatchRecord, metrics},
    entities::inventory_item,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Category of an alert, used by the presentation layer for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Inventory at or below its threshold
    Stock,
    /// A vaccination is due today
    Vaccine,
    /// A vaccination is due tomorrow
    Info,
}

/// A single alert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Alert {
    /// An inventory item is at or below its minimum threshold
    LowStock {
        /// Item name
        item_name: String,
        /// Quantity remaining
        quantity: f64,
        /// Unit of `quantity`
        unit: String,
    },
    /// A scheduled vaccination falls on the flock's current age
    VaccineDueToday {
        /// Vaccine name from the schedule
        vaccine: String,
        /// Flock age in days
        age_days: i64,
    },
    /// A scheduled vaccination falls on tomorrow's age
    VaccineDueTomorrow {
        /// Vaccine name from the schedule
        vaccine: String,
        /// Flock age in days tomorrow
        age_days: i64,
    },
}

impl Alert {
    /// Category of this alert
    #[must_use]
    pub const fn kind(&self) -> AlertKind {
        match self {
            Self::LowStock { .. } => AlertKind::Stock,
            Self::VaccineDueToday { .. } => AlertKind::Vaccine,
            Self::VaccineDueTomorrow { .. } => AlertKind::Info,
        }
    }

    /// Plain-text message for the alert
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::LowStock {
                item_name,
                quantity,
                unit,
            } => format!("Running low: {item_name} ({quantity} {unit} left)"),
            Self::VaccineDueToday { vaccine, age_days } => {
                format!("Vaccinate today (day {age_days}): {vaccine}")
            }
            Self::VaccineDueTomorrow { vaccine, age_days } => {
                format!("Prepare for tomorrow (day {age_days}): {vaccine}")
            }
        }
    }
}

/// A schedule entry that falls within a look-ahead window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingVaccination {
    /// Flock age on which the vaccine is due
    pub day_offset: i64,
    /// Days from today until it is due (0 = today)
    pub days_until: i64,
    /// Vaccine name
    pub name: String,
    /// Vaccine kind
    pub kind: String,
}

/// Low-stock alerts in inventory order.
#[must_use]
pub fn stock_alerts(inventory: &[inventory_item::Model]) -> Vec<Alert> {
    inventory
        .iter()
        .filter(|item| item.is_low_stock())
        .map(|item| Alert::LowStock {
            item_name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
        })
        .collect()
}

/// Vaccination alerts for a batch: at most one for today and one for tomorrow.
///
/// Inactive batches produce nothing.
#[must_use]
pub fn vaccine_alerts(
    record: &BatchRecord,
    schedule: &VaccineSchedule,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    if !record.is_active() {
        return Vec::new();
    }

    let age = metrics::age_days(record.batch.start_date, now);
    let mut alerts = Vec::with_capacity(2);

    if let Some(entry) = schedule.first_on_day(age) {
        alerts.push(Alert::VaccineDueToday {
            vaccine: entry.name.clone(),
            age_days: age,
        });
    }
    if let Some(entry) = schedule.first_on_day(age + 1) {
        alerts.push(Alert::VaccineDueTomorrow {
            vaccine: entry.name.clone(),
            age_days: age + 1,
        });
    }

    alerts
}

/// Computes every alert to show: stock first, then vaccinations for the active batch.
#[must_use]
pub fn compute_alerts(
    inventory: &[inventory_item::Model],
    active_batch: Option<&BatchRecord>,
    schedule: &VaccineSchedule,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts = stock_alerts(inventory);
    if let Some(record) = active_batch {
        alerts.extend(vaccine_alerts(record, schedule, now));
    }
    alerts
}

/// Schedule entries due within the next `horizon_days` days (today included), soonest first.
#[must_use]
pub fn upcoming_vaccinations(
    record: &BatchRecord,
    schedule: &VaccineSchedule,
    now: DateTime<Utc>,
    horizon_days: i64,
) -> Vec<UpcomingVaccination> {
    if !record.is_active() {
        return Vec::new();
    }

    let age = metrics::age_days(record.batch.start_date, now);
    let mut upcoming: Vec<UpcomingVaccination> = schedule
        .vaccines
        .iter()
        .filter(|entry| entry.day_offset >= age && entry.day_offset - age <= horizon_days)
        .map(|entry| UpcomingVaccination {
            day_offset: entry.day_offset,
            days_until: entry.day_offset - age,
            name: entry.name.clone(),
            kind: entry.kind.clone(),
        })
        .collect();
    upcoming.sort_by_key(|v| v.days_until);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BatchStatus;
    use crate::test_utils::*;
    use chrono::Days;

    fn schedule_with_x() -> VaccineSchedule {
        VaccineSchedule::from_entries(&[(7, "X", "viral")])
    }

    #[test]
    fn test_no_stock_alerts_when_all_above_threshold() {
        let inventory = vec![
            sample_item(1, "Starter feed", 500.0, 100.0),
            sample_item(2, "Vitamins", 5.0, 4.9),
        ];
        assert!(stock_alerts(&inventory).is_empty());
        let alerts = compute_alerts(
            &inventory,
            None,
            &VaccineSchedule::standard(),
            utc_noon(2024, 1, 1),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_stock_alerts_at_threshold_in_input_order() {
        let inventory = vec![
            sample_item(1, "Grower feed", 10.0, 50.0),
            sample_item(2, "Litter", 80.0, 20.0),
            sample_item(3, "Vitamins", 4.0, 4.0),
        ];
        let alerts = stock_alerts(&inventory);
        assert_eq!(alerts.len(), 2);
        assert!(
            matches!(&alerts[0], Alert::LowStock { item_name, .. } if item_name == "Grower feed")
        );
        assert!(matches!(&alerts[1], Alert::LowStock { item_name, .. } if item_name == "Vitamins"));
        assert!(alerts.iter().all(|a| a.kind() == AlertKind::Stock));
        assert!(alerts[0].message().contains("10 kg"));
    }

    #[test]
    fn test_vaccine_due_today() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(7));

        let alerts = compute_alerts(&[], Some(&record), &schedule_with_x(), now);
        let vaccine: Vec<&Alert> = alerts
            .iter()
            .filter(|a| a.kind() == AlertKind::Vaccine)
            .collect();
        assert_eq!(vaccine.len(), 1);
        assert!(vaccine[0].message().contains('X'));
        assert!(alerts.iter().all(|a| a.kind() != AlertKind::Info));
    }

    #[test]
    fn test_vaccine_due_tomorrow() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(6));

        let alerts = compute_alerts(&[], Some(&record), &schedule_with_x(), now);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind(), AlertKind::Info);
        assert!(alerts[0].message().contains('X'));
        assert_eq!(
            alerts[0],
            Alert::VaccineDueTomorrow {
                vaccine: "X".to_string(),
                age_days: 7
            }
        );
    }

    #[test]
    fn test_today_and_tomorrow_with_stock_first() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(10));
        let schedule =
            VaccineSchedule::from_entries(&[(10, "Today", "viral"), (11, "Tomorrow", "viral")]);
        let inventory = vec![sample_item(1, "Vaccine vials", 0.0, 2.0)];

        let alerts = compute_alerts(&inventory, Some(&record), &schedule, now);
        let kinds: Vec<AlertKind> = alerts.iter().map(Alert::kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Stock, AlertKind::Vaccine, AlertKind::Info]
        );
    }

    #[test]
    fn test_duplicate_day_offsets_take_first_entry() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(7));
        let schedule =
            VaccineSchedule::from_entries(&[(7, "First", "viral"), (7, "Second", "viral")]);

        let alerts = vaccine_alerts(&record, &schedule, now);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message().contains("First"));
    }

    #[test]
    fn test_inactive_batch_gets_no_vaccine_alerts() {
        let now = utc_noon(2024, 6, 15);
        let mut record = sample_record(1000, 1.0, now.date_naive() - Days::new(7));
        record.batch.status = BatchStatus::Completed;

        assert!(compute_alerts(&[], Some(&record), &schedule_with_x(), now).is_empty());
        assert!(upcoming_vaccinations(&record, &schedule_with_x(), now, 30).is_empty());
    }

    #[test]
    fn test_compute_alerts_is_stateless() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(7));
        let inventory = vec![sample_item(1, "Grower feed", 1.0, 5.0)];

        let first = compute_alerts(&inventory, Some(&record), &schedule_with_x(), now);
        let second = compute_alerts(&inventory, Some(&record), &schedule_with_x(), now);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_upcoming_vaccinations_window() {
        let now = utc_noon(2024, 6, 15);
        let record = sample_record(1000, 1.0, now.date_naive() - Days::new(9));

        let upcoming = upcoming_vaccinations(&record, &VaccineSchedule::standard(), now, 7);
        let days: Vec<(i64, i64)> = upcoming
            .iter()
            .map(|v| (v.day_offset, v.days_until))
            .collect();
        assert_eq!(days, vec![(10, 1), (14, 5)]);
    }
}

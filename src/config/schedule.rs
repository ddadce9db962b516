//! Vaccine schedule loading from config.toml
//!
//! The schedule is static configuration: an ordered list of vaccinations keyed by
//! flock age in days. It is read once at startup from the `[[vaccines]]` tables of
//! config.toml and never changes while the bot runs. When no file exists the
//! standard broiler program is used.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// One scheduled vaccination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineScheduleEntry {
    /// Flock age in days on which the vaccine is given
    pub day_offset: i64,
    /// Vaccine name and route, shown in alerts
    pub name: String,
    /// Free-text kind (e.g. "viral", "bacterial")
    pub kind: String,
}

/// Ordered vaccination program for a broiler flock
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VaccineSchedule {
    /// Entries in configuration order
    #[serde(default)]
    pub vaccines: Vec<VaccineScheduleEntry>,
}

impl VaccineSchedule {
    /// Builds a schedule from `(day_offset, name, kind)` tuples.
    #[must_use]
    pub fn from_entries(entries: &[(i64, &str, &str)]) -> Self {
        Self {
            vaccines: entries
                .iter()
                .map(|&(day_offset, name, kind)| VaccineScheduleEntry {
                    day_offset,
                    name: name.to_string(),
                    kind: kind.to_string(),
                })
                .collect(),
        }
    }

    /// The standard broiler program used when no config.toml is present.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(&[
            (7, "Hitchner B1 + IB (eye drop/spray)", "viral"),
            (10, "Gumboro (intermediate strain)", "viral"),
            (14, "Gumboro (hot strain)", "viral"),
            (18, "LaSota (eye drop/drinking water)", "viral"),
            (28, "Clone 30", "viral"),
        ])
    }

    /// First entry scheduled for exactly `day`, if any.
    ///
    /// Entries sharing a day offset are not merged; the earliest one in
    /// configuration order wins.
    #[must_use]
    pub fn first_on_day(&self, day: i64) -> Option<&VaccineScheduleEntry> {
        self.vaccines.iter().find(|entry| entry.day_offset == day)
    }

    /// True if two entries share the same day offset
    #[must_use]
    pub fn has_duplicate_days(&self) -> bool {
        self.vaccines
            .iter()
            .enumerate()
            .any(|(i, a)| self.vaccines[..i].iter().any(|b| b.day_offset == a.day_offset))
    }
}

/// Loads the vaccine schedule from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - An entry has a negative day offset
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<VaccineSchedule> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let schedule: VaccineSchedule = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if let Some(entry) = schedule.vaccines.iter().find(|e| e.day_offset < 0) {
        return Err(Error::Config {
            message: format!(
                "Vaccine '{}' has negative day offset {}",
                entry.name, entry.day_offset
            ),
        });
    }

    if schedule.has_duplicate_days() {
        warn!("Vaccine schedule has duplicate day offsets; only the first per day will alert");
    }

    Ok(schedule)
}

/// Loads the schedule from `FLOCK_CONFIG_PATH` (default ./config.toml), or the
/// standard program if that file does not exist.
pub fn load_default_schedule() -> Result<VaccineSchedule> {
    let path = std::env::var("FLOCK_CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        let schedule = load_schedule(&path)?;
        info!(
            "Loaded {} vaccine schedule entries from {path}",
            schedule.vaccines.len()
        );
        Ok(schedule)
    } else {
        info!("No config file at {path}; using the standard vaccine schedule");
        Ok(VaccineSchedule::standard())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_schedule_config() {
        let toml_str = r#"
            [[vaccines]]
            day_offset = 7
            name = "Hitchner B1"
            kind = "viral"

            [[vaccines]]
            day_offset = 14
            name = "Gumboro"
            kind = "viral"
        "#;

        let schedule: VaccineSchedule = toml::from_str(toml_str).unwrap();
        assert_eq!(schedule.vaccines.len(), 2);
        assert_eq!(schedule.vaccines[0].day_offset, 7);
        assert_eq!(schedule.vaccines[1].name, "Gumboro");
        assert!(!schedule.has_duplicate_days());
    }

    #[test]
    fn test_empty_config_is_empty_schedule() {
        let schedule: VaccineSchedule = toml::from_str("").unwrap();
        assert!(schedule.vaccines.is_empty());
    }

    #[test]
    fn test_standard_schedule_days() {
        let days: Vec<i64> = VaccineSchedule::standard()
            .vaccines
            .iter()
            .map(|v| v.day_offset)
            .collect();
        assert_eq!(days, vec![7, 10, 14, 18, 28]);
    }

    #[test]
    fn test_first_on_day_prefers_earliest_entry() {
        let schedule =
            VaccineSchedule::from_entries(&[(7, "A", "viral"), (7, "B", "viral"), (9, "C", "x")]);
        assert!(schedule.has_duplicate_days());
        assert_eq!(schedule.first_on_day(7).unwrap().name, "A");
        assert_eq!(schedule.first_on_day(9).unwrap().name, "C");
        assert!(schedule.first_on_day(8).is_none());
    }

    #[test]
    fn test_load_schedule_rejects_negative_offset() {
        let path = std::env::temp_dir().join("flock_ledger_negative_offset.toml");
        std::fs::write(
            &path,
            "[[vaccines]]\nday_offset = -1\nname = \"Bad\"\nkind = \"viral\"\n",
        )
        .unwrap();
        let result = load_schedule(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_schedule_missing_file() {
        let result = load_schedule("/nonexistent/flock_ledger/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}

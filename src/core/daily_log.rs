//! Daily log business logic - Appends per-day flock observations to a batch.
//!
//! Logs are append-only. Input guards run before anything touches the database:
//! mortality must be non-negative and feed and weight must be finite and non-negative.

use crate::{
    entities::{Batch, daily_log},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, warn};

/// Records one day's mortality, feed, and average weight for a batch.
///
/// # Arguments
/// * `batch_id` - The batch the observation belongs to
/// * `date` - Day of the observation
/// * `mortality` - Birds that died that day
/// * `feed_consumed` - Feed consumed, in kilograms
/// * `avg_weight` - Average live weight, in grams
pub async fn add_daily_log(
    db: &DatabaseConnection,
    batch_id: i64,
    date: NaiveDate,
    mortality: i64,
    feed_consumed: f64,
    avg_weight: f64,
) -> Result<daily_log::Model> {
    if mortality < 0 {
        return Err(Error::InvalidCount { count: mortality });
    }
    for value in [feed_consumed, avg_weight] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidAmount { amount: value });
        }
    }

    let batch = Batch::find_by_id(batch_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: batch_id.to_string(),
        })?;

    if date < batch.start_date {
        warn!(
            "Log for batch {} dated {date} precedes its start date {}",
            batch.id, batch.start_date
        );
    }

    let model = daily_log::ActiveModel {
        batch_id: Set(batch_id),
        date: Set(date),
        mortality: Set(mortality),
        feed_consumed: Set(feed_consumed),
        avg_weight: Set(avg_weight),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!(
        "Logged batch {batch_id} on {date}: mortality={mortality}, feed={feed_consumed}kg, weight={avg_weight}g"
    );
    Ok(result)
}

/// Retrieves all logs of a batch in insertion order.
pub async fn get_logs_for_batch(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<daily_log::Model>> {
    crate::entities::DailyLog::find()
        .filter(daily_log::Column::BatchId.eq(batch_id))
        .order_by_asc(daily_log::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_daily_log_validation() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;
        let day = batch.start_date;

        let result = add_daily_log(&db, batch.id, day, -1, 10.0, 100.0).await;
        assert!(matches!(result, Err(Error::InvalidCount { count: -1 })));

        let result = add_daily_log(&db, batch.id, day, 0, f64::NAN, 100.0).await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        let result = add_daily_log(&db, batch.id, day, 0, 10.0, -5.0).await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        let result = add_daily_log(&db, batch.id, day, 0, f64::INFINITY, 100.0).await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        assert!(get_logs_for_batch(&db, batch.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_daily_log_batch_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let result = add_daily_log(&db, 42, day, 0, 1.0, 1.0).await;
        assert!(matches!(result, Err(Error::BatchNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_logs_keep_insertion_order() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;
        let later = batch.start_date + chrono::Days::new(2);
        let earlier = batch.start_date + chrono::Days::new(1);

        add_daily_log(&db, batch.id, later, 4, 20.0, 300.0).await?;
        add_daily_log(&db, batch.id, earlier, 1, 10.0, 200.0).await?;

        let logs = get_logs_for_batch(&db, batch.id).await?;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].date, later);
        assert_eq!(logs[1].date, earlier);
        assert_eq!(logs[1].avg_weight, 200.0);
        Ok(())
    }
}

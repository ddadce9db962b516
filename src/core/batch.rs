//! Batch business logic - Handles batch creation, lookup, lifecycle, and deletion.
//!
//! A [`BatchRecord`] bundles a batch with its owned daily logs and transactions in
//! insertion order. It is the unit the metrics and alert engines work on, and the
//! listing functions here are the only way the rest of the crate loads one.

use crate::{
    entities::{Batch, BatchStatus, DailyLog, Transaction, batch, daily_log, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

/// A batch together with everything it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    /// The batch header
    pub batch: batch::Model,
    /// Daily logs in insertion order
    pub logs: Vec<daily_log::Model>,
    /// Transactions in insertion order
    pub transactions: Vec<transaction::Model>,
}

impl BatchRecord {
    /// Wraps a batch that has no logs or transactions yet.
    #[must_use]
    pub const fn new(batch: batch::Model) -> Self {
        Self {
            batch,
            logs: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// True if the batch status is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.batch.status == BatchStatus::Active
    }
}

/// Creates a new active batch after validating its header fields.
///
/// The name is trimmed and must be non-empty and unused, `initial_count` must be
/// positive, and `initial_cost` must be finite and non-negative.
pub async fn create_batch(
    db: &DatabaseConnection,
    name: String,
    breed: String,
    start_date: NaiveDate,
    initial_count: i64,
    initial_cost: f64,
) -> Result<batch::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Config {
            message: "Batch name cannot be empty".to_string(),
        });
    }
    if initial_count <= 0 {
        return Err(Error::InvalidCount {
            count: initial_count,
        });
    }
    if !initial_cost.is_finite() || initial_cost < 0.0 {
        return Err(Error::InvalidAmount {
            amount: initial_cost,
        });
    }
    if get_batch_by_name(db, &name).await?.is_some() {
        return Err(Error::BatchAlreadyExists { name });
    }

    let model = batch::ActiveModel {
        name: Set(name),
        breed: Set(breed.trim().to_string()),
        start_date: Set(start_date),
        initial_count: Set(initial_count),
        initial_cost: Set(initial_cost),
        status: Set(BatchStatus::Active),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!(
        "Created batch {} '{}' with {} birds placed on {}",
        result.id, result.name, result.initial_count, result.start_date
    );
    Ok(result)
}

/// Finds a batch by its unique ID.
pub async fn get_batch_by_id(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Option<batch::Model>> {
    Batch::find_by_id(batch_id).one(db).await.map_err(Into::into)
}

/// Finds a batch by its exact name.
pub async fn get_batch_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<batch::Model>> {
    Batch::find()
        .filter(batch::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all batch headers ordered by start date, newest first.
pub async fn get_all_batches(db: &DatabaseConnection) -> Result<Vec<batch::Model>> {
    Batch::find()
        .order_by_desc(batch::Column::StartDate)
        .order_by_desc(batch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads one batch with its logs and transactions.
pub async fn get_batch_record(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Option<BatchRecord>> {
    let Some(batch) = get_batch_by_id(db, batch_id).await? else {
        return Ok(None);
    };

    let logs = crate::core::daily_log::get_logs_for_batch(db, batch_id).await?;
    let transactions = crate::core::transaction::get_transactions_for_batch(db, batch_id).await?;

    Ok(Some(BatchRecord {
        batch,
        logs,
        transactions,
    }))
}

/// Loads one batch by name, failing with `BatchNotFound` if it does not exist.
pub async fn get_batch_record_by_name(db: &DatabaseConnection, name: &str) -> Result<BatchRecord> {
    let batch = get_batch_by_name(db, name)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: name.to_string(),
        })?;
    get_batch_record(db, batch.id)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: name.to_string(),
        })
}

/// Loads every batch with its logs and transactions, newest batch first.
///
/// Three queries in total regardless of how many batches exist.
pub async fn list_batches(db: &DatabaseConnection) -> Result<Vec<BatchRecord>> {
    let batches = get_all_batches(db).await?;

    let mut logs_by_batch: HashMap<i64, Vec<daily_log::Model>> = HashMap::new();
    for log in DailyLog::find()
        .order_by_asc(daily_log::Column::Id)
        .all(db)
        .await?
    {
        logs_by_batch.entry(log.batch_id).or_default().push(log);
    }

    let mut transactions_by_batch: HashMap<i64, Vec<transaction::Model>> = HashMap::new();
    for txn in Transaction::find()
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await?
    {
        transactions_by_batch
            .entry(txn.batch_id)
            .or_default()
            .push(txn);
    }

    Ok(batches
        .into_iter()
        .map(|batch| BatchRecord {
            logs: logs_by_batch.remove(&batch.id).unwrap_or_default(),
            transactions: transactions_by_batch.remove(&batch.id).unwrap_or_default(),
            batch,
        })
        .collect())
}

/// Picks the batch the alert engine should look at: the most recently started active one.
#[must_use]
pub fn current_active_batch(records: &[BatchRecord]) -> Option<&BatchRecord> {
    records
        .iter()
        .filter(|record| record.is_active())
        .max_by_key(|record| (record.batch.start_date, record.batch.id))
}

/// Sets the lifecycle status of a batch.
pub async fn update_batch_status(
    db: &DatabaseConnection,
    batch_id: i64,
    status: BatchStatus,
) -> Result<batch::Model> {
    let batch = get_batch_by_id(db, batch_id)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: batch_id.to_string(),
        })?;

    let mut active: batch::ActiveModel = batch.into();
    active.status = Set(status);
    let updated = active.update(db).await?;
    info!("Batch {} is now {}", updated.id, status.label());
    Ok(updated)
}

/// Deletes a batch together with all of its logs and transactions.
pub async fn delete_batch(db: &DatabaseConnection, batch_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let batch = Batch::find_by_id(batch_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: batch_id.to_string(),
        })?;

    let logs = DailyLog::delete_many()
        .filter(daily_log::Column::BatchId.eq(batch_id))
        .exec(&txn)
        .await?;
    let transactions = Transaction::delete_many()
        .filter(transaction::Column::BatchId.eq(batch_id))
        .exec(&txn)
        .await?;
    batch.delete(&txn).await?;

    txn.commit().await?;
    info!(
        "Deleted batch {batch_id} with {} logs and {} transactions",
        logs.rows_affected, transactions.rows_affected
    );
    Ok(())
}

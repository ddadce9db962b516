//! Transaction business logic - Records expenses and income against a batch.
//!
//! Amounts are always stored as non-negative values; direction comes from
//! [`TransactionKind`]. Chick purchase is not recorded here: it is derived from the
//! batch header (`initial_count * initial_cost`) by the metrics engine.

use crate::{
    entities::{Batch, TransactionCategory, TransactionKind, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Creates a new transaction for a batch.
///
/// # Arguments
/// * `batch_id` - The batch to book against
/// * `date` - Day the money moved
/// * `kind` - Expense or income
/// * `category` - Bookkeeping category
/// * `amount` - Non-negative, finite amount
/// * `notes` - Optional free-text notes (blank notes are stored as `None`)
pub async fn add_transaction(
    db: &DatabaseConnection,
    batch_id: i64,
    date: NaiveDate,
    kind: TransactionKind,
    category: TransactionCategory,
    amount: f64,
    notes: Option<String>,
) -> Result<transaction::Model> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    Batch::find_by_id(batch_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            name: batch_id.to_string(),
        })?;

    let notes = notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let model = transaction::ActiveModel {
        batch_id: Set(batch_id),
        date: Set(date),
        kind: Set(kind),
        category: Set(category),
        amount: Set(amount),
        notes: Set(notes),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!(
        "Created transaction {} for batch {batch_id}: {:?}/{} amount={amount:.2}",
        result.id,
        kind,
        category.label()
    );
    Ok(result)
}

/// Retrieves all transactions of a batch in insertion order.
pub async fn get_transactions_for_batch(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<transaction::Model>> {
    crate::entities::Transaction::find()
        .filter(transaction::Column::BatchId.eq(batch_id))
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

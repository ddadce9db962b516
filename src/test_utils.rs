//! Shared test utilities for the flock ledger.
//!
//! Database helpers set up an in-memory `SQLite` database and insert rows through the
//! core functions. The `sample_*` builders create models in memory for the pure
//! engine tests, without touching a database.

use crate::{
    core::{batch, batch::BatchRecord, daily_log, inventory, transaction},
    entities::{self, BatchStatus, InventoryCategory, TransactionCategory, TransactionKind},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Noon UTC on the given day; panics on an invalid date.
#[allow(clippy::unwrap_used)]
pub fn utc_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn default_start_date() -> NaiveDate {
    utc_noon(2024, 3, 1).date_naive()
}

/// Creates a test batch with sensible defaults.
///
/// # Defaults
/// * `breed`: "Ross 308"
/// * `start_date`: 2024-03-01
/// * `initial_count`: 1000
/// * `initial_cost`: 2.5
pub async fn create_test_batch(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::batch::Model> {
    batch::create_batch(
        db,
        name.to_string(),
        "Ross 308".to_string(),
        default_start_date(),
        1000,
        2.5,
    )
    .await
}

/// Sets up a database with one batch. Returns (db, batch).
pub async fn setup_with_batch() -> Result<(DatabaseConnection, entities::batch::Model)> {
    let db = setup_test_db().await?;
    let batch = create_test_batch(&db, "Test Batch").await?;
    Ok((db, batch))
}

/// Appends a log dated on the batch start date.
pub async fn create_test_log(
    db: &DatabaseConnection,
    batch_id: i64,
    mortality: i64,
    feed_consumed: f64,
    avg_weight: f64,
) -> Result<entities::daily_log::Model> {
    daily_log::add_daily_log(
        db,
        batch_id,
        default_start_date(),
        mortality,
        feed_consumed,
        avg_weight,
    )
    .await
}

/// Books a feed expense on the batch start date.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    batch_id: i64,
    amount: f64,
) -> Result<entities::transaction::Model> {
    transaction::add_transaction(
        db,
        batch_id,
        default_start_date(),
        TransactionKind::Expense,
        TransactionCategory::Feed,
        amount,
        None,
    )
    .await
}

/// Books a chicken sale on the batch start date.
pub async fn create_test_income(
    db: &DatabaseConnection,
    batch_id: i64,
    amount: f64,
) -> Result<entities::transaction::Model> {
    transaction::add_transaction(
        db,
        batch_id,
        default_start_date(),
        TransactionKind::Income,
        TransactionCategory::ChickenSale,
        amount,
        None,
    )
    .await
}

/// Creates a feed item measured in kg.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    quantity: f64,
    min_threshold: f64,
) -> Result<entities::inventory_item::Model> {
    inventory::create_inventory_item(
        db,
        name.to_string(),
        InventoryCategory::Feed,
        quantity,
        "kg".to_string(),
        min_threshold,
        None,
        None,
    )
    .await
}

/// An active batch with id 1 and no logs or transactions.
pub fn sample_record(initial_count: i64, initial_cost: f64, start_date: NaiveDate) -> BatchRecord {
    BatchRecord::new(entities::batch::Model {
        id: 1,
        name: "Sample".to_string(),
        breed: "Cobb 500".to_string(),
        start_date,
        initial_count,
        initial_cost,
        status: BatchStatus::Active,
    })
}

/// A log belonging to batch 1.
pub fn sample_log(
    id: i64,
    date: NaiveDate,
    mortality: i64,
    feed_consumed: f64,
    avg_weight: f64,
) -> entities::daily_log::Model {
    entities::daily_log::Model {
        id,
        batch_id: 1,
        date,
        mortality,
        feed_consumed,
        avg_weight,
    }
}

/// A feed-category transaction for batch 1 dated 2024-03-01.
pub fn sample_transaction(
    id: i64,
    kind: TransactionKind,
    amount: f64,
) -> entities::transaction::Model {
    entities::transaction::Model {
        id,
        batch_id: 1,
        date: default_start_date(),
        kind,
        category: TransactionCategory::Feed,
        amount,
        notes: None,
    }
}

/// A feed item in kg.
pub fn sample_item(
    id: i64,
    name: &str,
    quantity: f64,
    min_threshold: f64,
) -> entities::inventory_item::Model {
    entities::inventory_item::Model {
        id,
        name: name.to_string(),
        category: InventoryCategory::Feed,
        quantity,
        unit: "kg".to_string(),
        min_threshold,
        expiry_date: None,
        notes: None,
    }
}

//! Inventory business logic - Stock items and quantity adjustments.
//!
//! Quantities never go negative: a stock operation whose result would drop below
//! zero is rejected with [`Error::InsufficientStock`] and nothing is written.

use crate::{
    entities::{InventoryCategory, InventoryItem, inventory_item},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A change to an item's quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StockOperation {
    /// Receive stock
    Add(f64),
    /// Consume or discard stock
    Subtract(f64),
    /// Replace the quantity after a physical count
    Set(f64),
}

impl StockOperation {
    /// The operand carried by the operation
    #[must_use]
    pub const fn quantity(self) -> f64 {
        match self {
            Self::Add(q) | Self::Subtract(q) | Self::Set(q) => q,
        }
    }
}

fn validate_quantity(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount { amount: value })
    }
}

/// Computes the quantity after applying `operation` to `current`.
///
/// # Errors
/// * `InvalidAmount` if the operand is negative or not finite, or the result overflows
/// * `InsufficientStock` if the result would be negative
pub fn apply_stock_operation(current: f64, operation: StockOperation) -> Result<f64> {
    let quantity = operation.quantity();
    validate_quantity(quantity)?;

    let next = match operation {
        StockOperation::Add(q) => current + q,
        StockOperation::Subtract(q) => current - q,
        StockOperation::Set(q) => q,
    };

    if !next.is_finite() {
        return Err(Error::InvalidAmount { amount: next });
    }
    if next < 0.0 {
        return Err(Error::InsufficientStock {
            current,
            requested: quantity,
        });
    }
    Ok(next)
}

/// Creates a new inventory item after validating name, quantity, and threshold.
#[allow(clippy::too_many_arguments)]
pub async fn create_inventory_item(
    db: &DatabaseConnection,
    name: String,
    category: InventoryCategory,
    quantity: f64,
    unit: String,
    min_threshold: f64,
    expiry_date: Option<NaiveDate>,
    notes: Option<String>,
) -> Result<inventory_item::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Config {
            message: "Item name cannot be empty".to_string(),
        });
    }
    validate_quantity(quantity)?;
    validate_quantity(min_threshold)?;

    if get_item_by_name(db, &name).await?.is_some() {
        return Err(Error::InventoryItemAlreadyExists { name });
    }

    let model = inventory_item::ActiveModel {
        name: Set(name),
        category: Set(category),
        quantity: Set(quantity),
        unit: Set(unit.trim().to_string()),
        min_threshold: Set(min_threshold),
        expiry_date: Set(expiry_date),
        notes: Set(notes.filter(|n| !n.trim().is_empty())),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!(
        "Added inventory item {} '{}': {} {}",
        result.id, result.name, result.quantity, result.unit
    );
    Ok(result)
}

/// Lists the whole inventory in insertion order.
pub async fn list_inventory(db: &DatabaseConnection) -> Result<Vec<inventory_item::Model>> {
    InventoryItem::find()
        .order_by_asc(inventory_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an inventory item by its exact name.
pub async fn get_item_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<inventory_item::Model>> {
    InventoryItem::find()
        .filter(inventory_item::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Applies a stock operation to an item and persists the new quantity.
pub async fn adjust_stock(
    db: &DatabaseConnection,
    item_id: i64,
    operation: StockOperation,
) -> Result<inventory_item::Model> {
    let item = InventoryItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InventoryItemNotFound {
            name: item_id.to_string(),
        })?;

    let previous = item.quantity;
    let next = apply_stock_operation(previous, operation)?;

    let mut active: inventory_item::ActiveModel = item.into();
    active.quantity = Set(next);
    let updated = active.update(db).await?;
    info!(
        "Stock of '{}' changed {previous} -> {next} {} ({operation:?})",
        updated.name, updated.unit
    );
    Ok(updated)
}

/// Changes the low-stock threshold of an item.
pub async fn set_min_threshold(
    db: &DatabaseConnection,
    item_id: i64,
    min_threshold: f64,
) -> Result<inventory_item::Model> {
    validate_quantity(min_threshold)?;
    let item = InventoryItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InventoryItemNotFound {
            name: item_id.to_string(),
        })?;

    let mut active: inventory_item::ActiveModel = item.into();
    active.min_threshold = Set(min_threshold);
    active.update(db).await.map_err(Into::into)
}

/// Removes an item from the inventory.
pub async fn delete_inventory_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = InventoryItem::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::InventoryItemNotFound {
            name: item_id.to_string(),
        });
    }
    info!("Deleted inventory item {item_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_apply_stock_operation() {
        assert_eq!(apply_stock_operation(10.0, StockOperation::Add(5.0)).unwrap(), 15.0);
        assert_eq!(apply_stock_operation(10.0, StockOperation::Subtract(4.0)).unwrap(), 6.0);
        assert_eq!(apply_stock_operation(10.0, StockOperation::Subtract(10.0)).unwrap(), 0.0);
        assert_eq!(apply_stock_operation(10.0, StockOperation::Set(3.0)).unwrap(), 3.0);
        assert!(matches!(
            apply_stock_operation(f64::MAX, StockOperation::Add(f64::MAX)),
            Err(Error::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_apply_stock_operation_rejects_negative_result() {
        let result = apply_stock_operation(2.0, StockOperation::Subtract(5.0));
        assert!(matches!(
            result,
            Err(Error::InsufficientStock { current, requested })
                if current == 2.0 && requested == 5.0
        ));
    }

    #[test]
    fn test_apply_stock_operation_rejects_bad_operand() {
        for op in [
            StockOperation::Add(-1.0),
            StockOperation::Set(-0.5),
            StockOperation::Subtract(f64::NAN),
            StockOperation::Add(f64::INFINITY),
        ] {
            assert!(matches!(
                apply_stock_operation(10.0, op),
                Err(Error::InvalidAmount { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_create_and_list_inventory() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_item(&db, "Starter feed", 500.0, 100.0).await?;
        create_test_item(&db, "Vitamins", 2.0, 5.0).await?;

        let items = list_inventory(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Starter feed");
        assert!(!items[0].is_low_stock());
        assert!(items[1].is_low_stock());

        let duplicate = create_test_item(&db, "Vitamins", 1.0, 1.0).await;
        assert!(matches!(duplicate, Err(Error::InventoryItemAlreadyExists { .. })));

        let negative = create_test_item(&db, "Grit", -1.0, 1.0).await;
        assert!(matches!(negative, Err(Error::InvalidAmount { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_stock_persists() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Starter feed", 500.0, 100.0).await?;

        let updated = adjust_stock(&db, item.id, StockOperation::Subtract(450.0)).await?;
        assert_eq!(updated.quantity, 50.0);
        assert!(updated.is_low_stock());

        let rejected = adjust_stock(&db, item.id, StockOperation::Subtract(60.0)).await;
        assert!(matches!(rejected, Err(Error::InsufficientStock { .. })));

        let reloaded = get_item_by_name(&db, "Starter feed").await?.unwrap();
        assert_eq!(reloaded.quantity, 50.0);

        let restocked = adjust_stock(&db, item.id, StockOperation::Set(1000.0)).await?;
        assert_eq!(restocked.quantity, 1000.0);

        let missing = adjust_stock(&db, 9999, StockOperation::Add(1.0)).await;
        assert!(matches!(missing, Err(Error::InventoryItemNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_threshold_and_delete() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Vaccine vials", 10.0, 2.0).await?;

        let updated = set_min_threshold(&db, item.id, 12.0).await?;
        assert!(updated.is_low_stock());

        delete_inventory_item(&db, item.id).await?;
        assert!(list_inventory(&db).await?.is_empty());

        let again = delete_inventory_item(&db, item.id).await;
        assert!(matches!(again, Err(Error::InventoryItemNotFound { .. })));
        Ok(())
    }
}

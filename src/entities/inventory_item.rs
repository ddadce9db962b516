//! Inventory item entity - A stock-keeping unit independent of any batch.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// What kind of stock an item is
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum InventoryCategory {
    /// Feed
    #[sea_orm(string_value = "feed")]
    Feed,
    /// Medicine
    #[sea_orm(string_value = "medicine")]
    Medicine,
    /// Vaccine
    #[sea_orm(string_value = "vaccine")]
    Vaccine,
    /// Equipment
    #[sea_orm(string_value = "equipment")]
    Equipment,
    /// Other
    #[sea_orm(string_value = "other")]
    Other,
}

impl InventoryCategory {
    /// Parses a category label, falling back to `Other` for unknown input.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "feed" => Self::Feed,
            "medicine" => Self::Medicine,
            "vaccine" => Self::Vaccine,
            "equipment" => Self::Equipment,
            _ => Self::Other,
        }
    }
}

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Item name, unique across the inventory
    #[sea_orm(unique)]
    pub name: String,
    /// Kind of stock
    pub category: InventoryCategory,
    /// Quantity on hand, never negative
    pub quantity: f64,
    /// Unit label for `quantity` (e.g. "kg", "bag", "vial")
    pub unit: String,
    /// At or below this quantity the item raises a low-stock alert
    pub min_threshold: f64,
    /// Optional expiry date
    pub expiry_date: Option<Date>,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl Model {
    /// True when the item is at or below its minimum threshold
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_threshold
    }
}

/// Inventory items are not related to any other table
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

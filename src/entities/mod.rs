//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod batch;
pub mod daily_log;
pub mod inventory_item;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use batch::{BatchStatus, Column as BatchColumn, Entity as Batch, Model as BatchModel};
pub use daily_log::{Column as DailyLogColumn, Entity as DailyLog, Model as DailyLogModel};
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, InventoryCategory,
    Model as InventoryItemModel,
};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
    TransactionCategory, TransactionKind,
};

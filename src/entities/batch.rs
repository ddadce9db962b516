//! Batch entity - One production cycle (flock) from chick placement to sale.
//!
//! A batch owns its daily logs and financial transactions. The current bird
//! count is never stored; it is derived from `initial_count` and the logs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a batch
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Birds are on the farm
    #[sea_orm(string_value = "active")]
    Active,
    /// Flock sold or otherwise finished normally
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Abandoned before completion
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl BatchStatus {
    /// Lowercase label used in replies
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Batch database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Unique identifier for the batch
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable batch name, unique across the farm
    #[sea_orm(unique)]
    pub name: String,
    /// Breed of the birds (free text, e.g. "Ross 308")
    pub breed: String,
    /// Day the chicks were placed
    pub start_date: Date,
    /// Number of chicks placed
    pub initial_count: i64,
    /// Price paid per chick
    pub initial_cost: f64,
    /// Current lifecycle state
    pub status: BatchStatus,
}

/// Defines relationships between Batch and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One batch has many daily logs
    #[sea_orm(has_many = "super::daily_log::Entity")]
    DailyLogs,
    /// One batch has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::daily_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyLogs.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Daily log entity - One day's flock observation for a batch.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Daily log database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_logs")]
pub struct Model {
    /// Unique identifier, ascending in insertion order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Batch this observation belongs to
    pub batch_id: i64,
    /// Day of the observation
    pub date: Date,
    /// Birds that died that day
    pub mortality: i64,
    /// Feed consumed that day, in kilograms
    pub feed_consumed: f64,
    /// Average live bird weight that day, in grams
    pub avg_weight: f64,
}

/// Defines relationships between `DailyLog` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each log belongs to one batch
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id"
    )]
    Batch,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Transaction entity - Represents all financial events of a batch.
//!
//! Each transaction has a `batch_id`, date, `kind` (expense/income), category,
//! a non-negative amount, and optional notes. The direction of money is carried
//! by `kind`, never by the sign of `amount`.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money going out
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Money coming in
    #[sea_orm(string_value = "income")]
    Income,
}

/// Bookkeeping category of a transaction
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Feed purchases
    #[sea_orm(string_value = "feed")]
    Feed,
    /// Medicine and vaccines
    #[sea_orm(string_value = "medicine")]
    Medicine,
    /// Wages
    #[sea_orm(string_value = "labor")]
    Labor,
    /// Repairs and upkeep
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    /// Hauling
    #[sea_orm(string_value = "transport")]
    Transport,
    /// Water, power, gas
    #[sea_orm(string_value = "utilities")]
    Utilities,
    /// Live or dressed bird sales
    #[sea_orm(string_value = "chicken_sale")]
    ChickenSale,
    /// Egg sales
    #[sea_orm(string_value = "egg_sale")]
    EggSale,
    /// Anything else
    #[sea_orm(string_value = "other")]
    Other,
}

impl TransactionCategory {
    /// Parses a category label, falling back to `Other` for unknown input.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "feed" => Self::Feed,
            "medicine" => Self::Medicine,
            "labor" | "labour" => Self::Labor,
            "maintenance" => Self::Maintenance,
            "transport" => Self::Transport,
            "utilities" => Self::Utilities,
            "chicken_sale" => Self::ChickenSale,
            "egg_sale" => Self::EggSale,
            _ => Self::Other,
        }
    }

    /// Snake-case label, identical to the stored value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Medicine => "medicine",
            Self::Labor => "labor",
            Self::Maintenance => "maintenance",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::ChickenSale => "chicken_sale",
            Self::EggSale => "egg_sale",
            Self::Other => "other",
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the batch this transaction belongs to
    pub batch_id: i64,
    /// Day the money moved
    pub date: Date,
    /// Expense or income
    pub kind: TransactionKind,
    /// Bookkeeping category
    pub category: TransactionCategory,
    /// Non-negative amount of money
    pub amount: f64,
    /// Optional free-text notes
    pub notes: Option<String>,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one batch
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_known_and_unknown() {
        assert_eq!(TransactionCategory::parse_lenient("Feed"), TransactionCategory::Feed);
        assert_eq!(
            TransactionCategory::parse_lenient("chicken sale"),
            TransactionCategory::ChickenSale
        );
        assert_eq!(
            TransactionCategory::parse_lenient("egg-sale"),
            TransactionCategory::EggSale
        );
        assert_eq!(TransactionCategory::parse_lenient("labour"), TransactionCategory::Labor);
        assert_eq!(TransactionCategory::parse_lenient("fuel"), TransactionCategory::Other);
    }
}

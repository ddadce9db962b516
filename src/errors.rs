//! Unified error types for the flock ledger.
//!
//! The metrics and alert engines never return errors; everything here comes from
//! persistence, input validation, configuration, or the Discord layer.

use thiserror::Error;

/// All errors that can surface from the gateway, configuration, or bot layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or generic validation problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Underlying `SeaORM` / `SQLite` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No batch matches the given name or id
    #[error("Batch '{name}' not found")]
    BatchNotFound {
        /// Name or id that was looked up
        name: String,
    },

    /// A batch with this name already exists
    #[error("Batch '{name}' already exists")]
    BatchAlreadyExists {
        /// Conflicting name
        name: String,
    },

    /// No inventory item matches the given name or id
    #[error("Inventory item '{name}' not found")]
    InventoryItemNotFound {
        /// Name or id that was looked up
        name: String,
    },

    /// An inventory item with this name already exists
    #[error("Inventory item '{name}' already exists")]
    InventoryItemAlreadyExists {
        /// Conflicting name
        name: String,
    },

    /// Money or quantity that is negative, NaN, or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// Rejected value
        amount: f64,
    },

    /// Bird count that is not allowed (e.g. zero birds placed)
    #[error("Invalid count: {count}")]
    InvalidCount {
        /// Rejected value
        count: i64,
    },

    /// Stock operation would drive a quantity below zero
    #[error("Insufficient stock: have {current}, tried to remove {requested}")]
    InsufficientStock {
        /// Quantity on hand
        current: f64,
        /// Quantity the operation tried to take out
        requested: f64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Formatting error while building a reply
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

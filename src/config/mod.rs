/// Database configuration and connection management
pub mod database;

/// Vaccine schedule loading from config.toml
pub mod schedule;

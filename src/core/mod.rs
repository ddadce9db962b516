//! Core business logic - framework-agnostic batch, log, transaction, inventory,
//! metrics, alerting, and reporting operations.
//!
//! The persistence functions take a `SeaORM` connection; the engines
//! (`metrics`, `alerts`, `dashboard`, `report`) are pure and take `now` explicitly.

/// Alert engine: low-stock and vaccination alerts
pub mod alerts;
/// Batch persistence and the `BatchRecord` aggregate
pub mod batch;
/// Daily log persistence
pub mod daily_log;
/// Farm-wide dashboard aggregation
pub mod dashboard;
/// Inventory persistence and stock operations
pub mod inventory;
/// Metrics engine: per-batch KPIs
pub mod metrics;
/// Text formatting of metrics, alerts, and dashboards
pub mod report;
/// Transaction persistence
pub mod transaction;

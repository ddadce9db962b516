//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Alert and dashboard commands
pub mod alerts;

/// Batch lifecycle and daily log commands
pub mod batch;

/// Expense and income commands
pub mod finance;

/// General utility commands
pub mod general;

/// Inventory commands
pub mod inventory;

/// Shared argument parsing for commands
pub mod utils;

// Export commands
pub use alerts::*;
pub use batch::*;
pub use finance::*;
pub use general::*;
pub use inventory::*;

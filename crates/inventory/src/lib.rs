//! Inventory module: the beverage shelf.
//!
//! Holds the fixed-size grid of slots, its aggregate price queries, stock
//! insertion/removal, and the plain-text export.

pub mod error;
pub mod grid;
pub mod report;
pub mod shared;

pub use error::InventoryError;
pub use grid::{InsertionScope, InventoryGrid, SlotPosition};
pub use report::ExportSummary;
pub use shared::SharedInventory;

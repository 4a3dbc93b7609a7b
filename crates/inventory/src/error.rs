//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

use bevstock_core::DomainError;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("column {column} out of range (grid has {columns} columns)")]
    OutOfRange { column: usize, columns: usize },

    #[error("beverage already stocked: {0}")]
    DuplicateId(String),

    #[error("beverage not found: {0}")]
    NotFound(String),

    #[error("no empty slot within the first {rows_scanned} row(s)")]
    CapacityExceeded { rows_scanned: usize },

    #[error("cannot insert the empty-slot sentinel")]
    EmptyRecord,

    #[error("invalid grid dimensions ({rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("row {row} has {found} slots, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("inventory lock poisoned")]
    LockPoisoned,

    #[error("failed to write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

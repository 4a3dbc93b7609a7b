//! `bevstock` driver: loads a shelf, runs the stock queries, writes the report.

pub mod config;
pub mod layout;
pub mod sample;

use anyhow::Context;
use serde::Serialize;

use bevstock_inventory::{ExportSummary, InventoryError, InventoryGrid};

pub use config::{AppConfig, ConfigError};
pub use layout::{LayoutError, ShelfLayout, SlotEntry};

/// Id removed during a run. Not stocked on the sample shelf.
pub const DISCONTINUED_ID: &str = "C001";

/// Outcome of offering one beverage to the shelf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RestockOutcome {
    Stocked { id: String, row: usize, column: usize },
    Rejected { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_value: f64,
    pub brand: String,
    pub brand_value: f64,
    pub column: usize,
    pub column_value: f64,
    pub removed: usize,
    pub restock: Vec<RestockOutcome>,
    pub export: ExportSummary,
}

/// Build the shelf described by `config`.
pub fn load_shelf(config: &AppConfig) -> anyhow::Result<InventoryGrid> {
    let grid = match &config.layout_path {
        Some(path) => ShelfLayout::load(path)
            .and_then(ShelfLayout::into_grid)
            .with_context(|| format!("failed to load shelf layout from {}", path.display()))?,
        None => sample::sample_shelf().context("failed to build sample shelf")?,
    };
    Ok(match config.insertion_scope {
        Some(scope) => grid.with_insertion_scope(scope),
        None => grid,
    })
}

/// Run the full stock workflow against `grid`.
///
/// Rejected restocks are recorded in the summary; a failed export aborts.
pub fn run_on(mut grid: InventoryGrid, config: &AppConfig) -> anyhow::Result<RunSummary> {
    let total_value = grid.total_value();
    let brand_value = grid.total_value_by_brand(&config.brand);
    let column_value = grid
        .total_value_by_column(config.column)
        .with_context(|| format!("cannot total column {}", config.column))?;

    let removed = grid.remove_by_id(DISCONTINUED_ID);

    let mut restock = Vec::new();
    for record in sample::restock_records()? {
        let id = record.id().to_string();
        let outcome = match grid.insert(record) {
            Ok(at) => RestockOutcome::Stocked {
                id,
                row: at.row,
                column: at.column,
            },
            Err(
                err @ (InventoryError::DuplicateId(_) | InventoryError::CapacityExceeded { .. }),
            ) => RestockOutcome::Rejected {
                id,
                reason: err.to_string(),
            },
            Err(err) => return Err(err).context("restock failed"),
        };
        restock.push(outcome);
    }

    let export = grid
        .export_report(&config.report_path)
        .context("failed to export stock report")?;

    Ok(RunSummary {
        total_value,
        brand: config.brand.clone(),
        brand_value,
        column: config.column,
        column_value,
        removed,
        restock,
        export,
    })
}

pub fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let grid = load_shelf(config)?;
    run_on(grid, config)
}

//! JSON shelf layouts.
//!
//! Records go through the domain constructors, so a promoted drink listed at
//! 1000 is stocked at 900 just like one built in code.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use bevstock_beverages::{BeverageInfo, BeverageRecord, MineralWater, SugaredBeverage};
use bevstock_core::{BeverageId, DomainError, DomainResult};
use bevstock_inventory::{InsertionScope, InventoryError, InventoryGrid};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid beverage at ({row}, {column}): {source}")]
    Beverage {
        row: usize,
        column: usize,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Grid(#[from] InventoryError),
}

/// Fields shared by every non-empty slot entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeverageFields {
    pub id: String,
    pub name: String,
    pub volume_liters: f64,
    pub price: f64,
    pub brand: String,
}

impl BeverageFields {
    fn into_info(self) -> DomainResult<BeverageInfo> {
        BeverageInfo::new(
            BeverageId::new(self.id)?,
            self.name,
            self.volume_liters,
            self.price,
            self.brand,
        )
    }
}

/// One slot as written in a layout file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotEntry {
    Sugared {
        #[serde(flatten)]
        fields: BeverageFields,
        sugar_percent: f64,
        #[serde(default)]
        has_promotion: bool,
    },
    Water {
        #[serde(flatten)]
        fields: BeverageFields,
        origin: String,
    },
    Empty,
}

impl SlotEntry {
    pub fn into_record(self) -> DomainResult<BeverageRecord> {
        Ok(match self {
            SlotEntry::Sugared {
                fields,
                sugar_percent,
                has_promotion,
            } => SugaredBeverage::new(fields.into_info()?, sugar_percent, has_promotion)?.into(),
            SlotEntry::Water { fields, origin } => {
                MineralWater::new(fields.into_info()?, origin).into()
            }
            SlotEntry::Empty => BeverageRecord::Empty,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShelfLayout {
    pub rows: Vec<Vec<SlotEntry>>,
    #[serde(default)]
    pub insertion_scope: InsertionScope,
}

impl ShelfLayout {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), rows = layout.rows.len(), "loaded shelf layout");
        Ok(layout)
    }

    pub fn into_grid(self) -> Result<InventoryGrid, LayoutError> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for (row, entries) in self.rows.into_iter().enumerate() {
            let mut records = Vec::with_capacity(entries.len());
            for (column, entry) in entries.into_iter().enumerate() {
                let record = entry
                    .into_record()
                    .map_err(|source| LayoutError::Beverage { row, column, source })?;
                records.push(record);
            }
            rows.push(records);
        }
        Ok(InventoryGrid::from_rows(rows)?.with_insertion_scope(self.insertion_scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LAYOUT: &str = r#"{
        "insertion_scope": "all-rows",
        "rows": [
            [
                {"kind": "sugared", "id": "GC002", "name": "Sprite", "volume_liters": 0.7,
                 "price": 2000, "brand": "CocaCola", "sugar_percent": 0.5, "has_promotion": true},
                {"kind": "empty"}
            ],
            [
                {"kind": "empty"},
                {"kind": "water", "id": "AM001", "name": "Manantial", "volume_liters": 1,
                 "price": 2000, "brand": "AguaClara", "origin": "Manantial"}
            ]
        ]
    }"#;

    #[test]
    fn parses_layout_and_builds_grid() {
        let grid = ShelfLayout::from_json(LAYOUT).unwrap().into_grid().unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 2));
        assert_eq!(grid.insertion_scope(), InsertionScope::AllRows);
        assert_eq!(grid.get(0, 0).unwrap().price(), 1800.0);
        assert_eq!(grid.get(1, 1).unwrap().id(), "AM001");
        assert!(grid.get(0, 1).unwrap().is_empty());
    }

    #[test]
    fn insertion_scope_defaults_to_first_row() {
        let layout = ShelfLayout::from_json(r#"{"rows": [[{"kind": "empty"}]]}"#).unwrap();
        assert_eq!(layout.insertion_scope, InsertionScope::FirstRow);
    }

    #[test]
    fn invalid_beverage_reports_its_slot() {
        let json = r#"{"rows": [[{"kind": "empty"}, {"kind": "sugared", "id": "GX1", "name": "X",
            "volume_liters": 0.5, "price": 10, "brand": "B", "sugar_percent": 250}]]}"#;
        let err = ShelfLayout::from_json(json).unwrap().into_grid().unwrap_err();
        match err {
            LayoutError::Beverage { row, column, .. } => assert_eq!((row, column), (0, 1)),
            other => panic!("Expected Beverage error, got {other:?}"),
        }
    }

    #[test]
    fn reserved_id_is_rejected() {
        let json = r#"{"rows": [[{"kind": "water", "id": "null", "name": "X",
            "volume_liters": 1, "price": 1, "brand": "B", "origin": "O"}]]}"#;
        let err = ShelfLayout::from_json(json).unwrap().into_grid().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Beverage { source: DomainError::InvalidId(_), .. }
        ));
    }

    #[test]
    fn ragged_layout_is_a_grid_error() {
        let json = r#"{"rows": [[{"kind": "empty"}, {"kind": "empty"}], [{"kind": "empty"}]]}"#;
        let err = ShelfLayout::from_json(json).unwrap().into_grid().unwrap_err();
        assert!(matches!(err, LayoutError::Grid(InventoryError::RaggedRow { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ShelfLayout::from_json("{\"rows\": ["),
            Err(LayoutError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelf.json");
        std::fs::write(&path, LAYOUT).unwrap();

        let layout = ShelfLayout::load(&path).unwrap();
        assert_eq!(layout.rows.len(), 2);

        let missing = dir.path().join("nope.json");
        assert!(matches!(ShelfLayout::load(&missing), Err(LayoutError::Read { .. })));
    }
}

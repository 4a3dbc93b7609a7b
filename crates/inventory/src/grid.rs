//! Fixed-size beverage shelf.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bevstock_beverages::BeverageRecord;
use bevstock_core::EMPTY_SLOT_ID;

use crate::error::InventoryError;

/// Row/column coordinates of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotPosition {
    pub row: usize,
    pub column: usize,
}

impl SlotPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl core::fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Which rows `insert` looks at when searching for a free slot.
///
/// `FirstRow` is the historical behavior: only row 0 is scanned, so a shelf
/// whose first row is full rejects new stock even when lower rows have gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionScope {
    #[default]
    FirstRow,
    AllRows,
}

impl FromStr for InsertionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first-row" => Ok(InsertionScope::FirstRow),
            "all-rows" => Ok(InsertionScope::AllRows),
            other => Err(format!(
                "unknown insertion scope `{other}` (expected `first-row` or `all-rows`)"
            )),
        }
    }
}

/// Two-dimensional shelf of beverage slots.
///
/// Dimensions are fixed at construction. Slots are stored row-major and every
/// slot always holds a record (possibly [`BeverageRecord::Empty`]).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryGrid {
    rows: usize,
    columns: usize,
    slots: Vec<BeverageRecord>,
    insertion_scope: InsertionScope,
}

impl InventoryGrid {
    /// Create a shelf with every slot empty.
    pub fn new(rows: usize, columns: usize) -> Result<Self, InventoryError> {
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len > 0)
            .ok_or(InventoryError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            slots: vec![BeverageRecord::Empty; len],
            insertion_scope: InsertionScope::default(),
        })
    }

    /// Build a shelf from pre-filled rows.
    ///
    /// Rows must be rectangular and non-empty ids must be unique.
    pub fn from_rows(rows: Vec<Vec<BeverageRecord>>) -> Result<Self, InventoryError> {
        let row_count = rows.len();
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || columns == 0 {
            return Err(InventoryError::InvalidDimensions {
                rows: row_count,
                columns,
            });
        }

        let mut slots = Vec::with_capacity(row_count * columns);
        let mut seen = HashSet::new();
        for (row, records) in rows.into_iter().enumerate() {
            if records.len() != columns {
                return Err(InventoryError::RaggedRow {
                    row,
                    expected: columns,
                    found: records.len(),
                });
            }
            for record in records {
                if !record.is_empty() && !seen.insert(record.id().to_string()) {
                    return Err(InventoryError::DuplicateId(record.id().to_string()));
                }
                slots.push(record);
            }
        }

        Ok(Self {
            rows: row_count,
            columns,
            slots,
            insertion_scope: InsertionScope::default(),
        })
    }

    pub fn with_insertion_scope(mut self, scope: InsertionScope) -> Self {
        self.insertion_scope = scope;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn insertion_scope(&self) -> InsertionScope {
        self.insertion_scope
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&BeverageRecord> {
        let index = self.index_of(row, column)?;
        Some(&self.slots[index])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut BeverageRecord> {
        let index = self.index_of(row, column)?;
        Some(&mut self.slots[index])
    }

    /// All slots in row-major order, with their positions.
    pub fn slots(&self) -> impl Iterator<Item = (SlotPosition, &BeverageRecord)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, record)| (self.position(i), record))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|r| !r.is_empty()).count()
    }

    /// Position of the first slot stocked with `id`.
    pub fn find(&self, id: &str) -> Option<SlotPosition> {
        if id == EMPTY_SLOT_ID {
            return None;
        }
        self.slots
            .iter()
            .position(|r| !r.is_empty() && r.id() == id)
            .map(|i| self.position(i))
    }

    /// Sum of every slot's price. Empty slots count as zero.
    pub fn total_value(&self) -> f64 {
        let total: f64 = self.slots.iter().map(BeverageRecord::price).sum();
        tracing::info!(total, "total value of all beverages");
        total
    }

    /// Sum of prices of the slots whose brand is exactly `brand`.
    pub fn total_value_by_brand(&self, brand: &str) -> f64 {
        let total: f64 = self
            .slots
            .iter()
            .filter(|r| r.brand() == Some(brand))
            .map(BeverageRecord::price)
            .sum();
        tracing::info!(brand, total, "total value by brand");
        total
    }

    /// Sum of prices down one column.
    pub fn total_value_by_column(&self, column: usize) -> Result<f64, InventoryError> {
        if column >= self.columns {
            return Err(InventoryError::OutOfRange {
                column,
                columns: self.columns,
            });
        }
        let total: f64 = (0..self.rows)
            .map(|row| self.slots[row * self.columns + column].price())
            .sum();
        tracing::info!(column, total, "total value by column");
        Ok(total)
    }

    /// Clear every slot holding `id`. Returns how many slots were cleared.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        if id == EMPTY_SLOT_ID {
            return 0;
        }
        let mut removed = 0;
        for slot in self.slots.iter_mut().filter(|r| r.id() == id) {
            *slot = BeverageRecord::Empty;
            removed += 1;
        }
        if removed == 0 {
            tracing::debug!(id, "remove: no slot holds this beverage");
        } else {
            tracing::info!(id, removed, "removed beverage");
        }
        removed
    }

    /// Stock `record` in the first empty slot within the insertion scope.
    ///
    /// Duplicates and a full scope are rejected; the shelf is left untouched.
    pub fn insert(&mut self, record: BeverageRecord) -> Result<SlotPosition, InventoryError> {
        if record.is_empty() {
            return Err(InventoryError::EmptyRecord);
        }

        if let Some(existing) = self.find(record.id()) {
            tracing::warn!(id = record.id(), at = %existing, "insert rejected: id already stocked");
            return Err(InventoryError::DuplicateId(record.id().to_string()));
        }

        let rows_scanned = match self.insertion_scope {
            InsertionScope::FirstRow => 1,
            InsertionScope::AllRows => self.rows,
        };

        let Some(index) = (0..rows_scanned * self.columns).find(|&i| self.slots[i].is_empty())
        else {
            tracing::warn!(id = record.id(), rows_scanned, "insert rejected: no empty slot");
            return Err(InventoryError::CapacityExceeded { rows_scanned });
        };

        let at = self.position(index);
        tracing::info!(id = record.id(), %at, "inserted beverage");
        self.slots[index] = record;
        Ok(at)
    }

    /// Change the stored price of a stocked beverage.
    pub fn set_price(&mut self, id: &str, price: f64) -> Result<(), InventoryError> {
        let at = self
            .find(id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        let index = at.row * self.columns + at.column;
        if let Some(info) = self.slots[index].info_mut() {
            info.set_price(price)?;
        }
        Ok(())
    }

    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    fn position(&self, index: usize) -> SlotPosition {
        SlotPosition::new(index / self.columns, index % self.columns)
    }
}

//! Lock-guarded handle for sharing one shelf between threads.

use std::sync::{Arc, RwLock};

use crate::error::InventoryError;
use crate::grid::InventoryGrid;

/// Cloneable handle to a single shelf behind one reader/writer lock.
///
/// Every mutation goes through [`SharedInventory::write`], so at most one
/// writer touches the grid at a time.
#[derive(Debug, Clone)]
pub struct SharedInventory {
    inner: Arc<RwLock<InventoryGrid>>,
}

impl SharedInventory {
    pub fn new(grid: InventoryGrid) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&InventoryGrid) -> R) -> Result<R, InventoryError> {
        let guard = self.inner.read().map_err(|_| InventoryError::LockPoisoned)?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut InventoryGrid) -> R) -> Result<R, InventoryError> {
        let mut guard = self.inner.write().map_err(|_| InventoryError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Copy of the current shelf state.
    pub fn snapshot(&self) -> Result<InventoryGrid, InventoryError> {
        self.read(InventoryGrid::clone)
    }
}
